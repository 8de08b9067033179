use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Enforce file/network access policies for agent tools"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new policy file
    Init {
        /// Output policy file path
        output: PathBuf,

        /// Policy name
        #[arg(long, default_value = "default")]
        name: String,

        /// Allowed file paths (globs)
        #[arg(long = "allowed-paths", value_name = "PATTERN", num_args = 1..)]
        allowed_paths: Vec<String>,

        /// Allowed network domains
        #[arg(long = "allowed-domains", value_name = "PATTERN", num_args = 1..)]
        allowed_domains: Vec<String>,
    },

    /// Check if access to a resource is allowed
    Check {
        /// Policy file path
        policy: PathBuf,

        /// Resource type ("file" or "network")
        resource_type: String,

        /// Resource to check
        resource: String,
    },

    /// Validate a policy file
    Validate {
        /// Policy file path
        policy: PathBuf,
    },

    /// List policy contents
    List {
        /// Policy file path
        policy: PathBuf,
    },
}
