//! Subject domain entities.

pub mod model;
pub mod role;

pub use model::Subject;
pub use role::Role;
