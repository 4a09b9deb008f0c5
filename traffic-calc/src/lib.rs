// traffic-calc/src/lib.rs
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod normalize;
pub mod statistics;
pub mod scoring;

pub use normalize::{i_score, score, z_score};
pub use scoring::aggregate;
pub use statistics::mean;

/// A normalized score in the `[0, 1]` range.
pub type Score = f64;
