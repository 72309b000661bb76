//! Small containers shared by the `vc_` crates.
//!
//! - [`hash`]: fixed-seed and pass-through hash states over *hashbrown*.
//! - [`TypeIdMap`]: an insertion-ordered map keyed by [`TypeId`](core::any::TypeId).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod typeid_map;

pub mod hash;

// -----------------------------------------------------------------------------
// Top-level exports

pub use typeid_map::TypeIdMap;
