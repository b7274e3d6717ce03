#![forbid(unsafe_code)]

//! Collatz Runtime
//!
//! Wraps the pure kernel with a lossless JSON record codec, a
//! file-backed sequence store, and the analysis session tying
//! generation, statistics, and persistence together.
//!
//! No sequence logic lives here — generation and trajectory
//! validation are delegated to the kernel.

pub mod analyzer;
pub mod codec;
pub mod store;
