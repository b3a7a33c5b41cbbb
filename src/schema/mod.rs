//! Schema module - configuration and seeding types for Chroma Life.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
