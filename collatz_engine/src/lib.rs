#![forbid(unsafe_code)]

pub mod arithmetic;
pub mod domain;
pub mod generator;
pub mod invariants;
pub mod stats;
