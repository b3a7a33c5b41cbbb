//! Chroma Life - a color-diffusing, toroidal Game of Life derivative.
//!
//! Cells carry a vitality counter (0 = dead, capped at 8) and an RGB color
//! that diffuses from live neighbors each generation under one of two blend
//! modes.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and seeding types
//! - `compute`: The toroidal field and its generation-transition rule
//!
//! # Example
//!
//! ```rust
//! use chroma_life::{FieldStats, Pattern, Seed, SimulationConfig};
//!
//! // Create configuration
//! let config = SimulationConfig::default();
//!
//! // Seed a reproducible random field
//! let seed = Seed {
//!     pattern: Pattern::Random,
//!     rng_seed: Some(42),
//! };
//! let mut field = seed.generate(&config);
//!
//! // Advance a few generations
//! for _ in 0..10 {
//!     field = field.next_round();
//! }
//!
//! println!("{} live cells", FieldStats::from_field(&field).live_cells);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::{Cell, Field, FieldStats, Rgb};
pub use schema::{BlendMode, Pattern, Seed, SimulationConfig};
