use clap::Parser;
use monban::cli::{self, Args};

fn main() {
    env_logger::init();

    let args = Args::parse();

    match cli::run(args.command) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
