//! Benchmark Harness Module
//!
//! Deterministic data generation and the seeded trial loop.
//!
//! # Components
//!
//! - [`lcg`] - 32-bit Numerical Recipes LCG
//! - [`sample`] - Bounded sample sequences
//! - [`trials`] - Seeded trial aggregation (sequential and parallel)

pub mod lcg;
pub mod sample;
pub mod trials;
