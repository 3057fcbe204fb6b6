//! CLI command implementations.

pub mod describe;
pub mod info;
pub mod package_id;
pub mod validate;
