//! Converting text into typed values.
//!
//! - [`Parser`]: a shareable text-to-value function.
//! - [`ParserRegistry`]: parsers keyed by type, resolved exactly or through a descendant.
//! - [`default_scalar_parsers`]: parsers for strings, floats, integers, characters and booleans.

mod parser;
mod registry;
mod scalar;

pub use parser::Parser;
pub use registry::{ParserEntry, ParserRegistry};
pub use scalar::default_scalar_parsers;
