pub mod domain;
pub mod model;
pub mod path;

pub use model::Policy;
