//! Services the combat core consumes from its caller.
//!
//! The environment is injected rather than global so that battles are
//! reproducible under test.

pub mod rng;

pub use rng::{PcgRng, RandomSource, SequenceRng};
