use std::path::Path;

use crate::engine::PolicyEngine;
use crate::error::MonbanError;
use crate::policy::Policy;

use super::args::Command;

/// Run one subcommand and return the process exit code.
pub fn run(command: Command) -> Result<i32, MonbanError> {
    match command {
        Command::Init {
            output,
            name,
            allowed_paths,
            allowed_domains,
        } => cmd_init(&output, name, allowed_paths, allowed_domains),
        Command::Check {
            policy,
            resource_type,
            resource,
        } => cmd_check(&policy, &resource_type, &resource),
        Command::Validate { policy } => Ok(cmd_validate(&policy)),
        Command::List { policy } => cmd_list(&policy),
    }
}

fn cmd_init(
    output: &Path,
    name: String,
    allowed_paths: Vec<String>,
    allowed_domains: Vec<String>,
) -> Result<i32, MonbanError> {
    let policy = Policy {
        name,
        allowed_file_paths: allowed_paths,
        allowed_domains,
        strict: false,
    };
    policy.save(output)?;
    println!("Created policy file: {}", output.display());
    Ok(0)
}

fn cmd_check(policy_path: &Path, resource_type: &str, resource: &str) -> Result<i32, MonbanError> {
    let policy = Policy::load(policy_path)?;
    let engine = PolicyEngine::new(&policy);

    let decision = match resource_type {
        "file" => engine.check_file_access(resource),
        "network" => engine.check_network_access(resource),
        other => {
            return Err(MonbanError::UnknownResourceType {
                value: other.to_string(),
            });
        }
    };

    if decision.allowed {
        println!("ALLOWED: {resource}");
        Ok(0)
    } else {
        println!("DENIED: {resource} - {}", decision.reason);
        Ok(1)
    }
}

fn cmd_validate(policy_path: &Path) -> i32 {
    match Policy::load(policy_path) {
        Ok(policy) => {
            println!("Valid policy: {}", policy.name);
            println!("  Allowed paths: {}", policy.allowed_file_paths.len());
            println!("  Allowed domains: {}", policy.allowed_domains.len());
            0
        }
        Err(err) => {
            eprintln!("Invalid policy: {err}");
            1
        }
    }
}

fn cmd_list(policy_path: &Path) -> Result<i32, MonbanError> {
    let policy = Policy::load(policy_path)?;
    println!("Policy: {}", policy.name);
    println!("  Allowed file paths:");
    for pattern in &policy.allowed_file_paths {
        println!("    - {pattern}");
    }
    if policy.allowed_file_paths.is_empty() {
        println!("    (none)");
    }
    println!("  Allowed domains:");
    for pattern in &policy.allowed_domains {
        println!("    - {pattern}");
    }
    if policy.allowed_domains.is_empty() {
        println!("    (none)");
    }
    Ok(0)
}
