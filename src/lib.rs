//! Access-control decision engine for sandboxed tool execution.
//!
//! A [`policy::Policy`] declares which file path patterns and network domain
//! patterns are allowed; an [`engine::PolicyEngine`] answers "may I read this
//! path / connect to this host?" with an [`engine::AccessDecision`]. The
//! engine only decides, it never intercepts or enforces.

pub mod cli;
pub mod engine;
pub mod error;
pub mod policy;

pub use engine::{AccessDecision, PolicyEngine, ResourceType};
pub use error::MonbanError;
pub use policy::Policy;
