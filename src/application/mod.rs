//! Application layer: orchestration of the generator for outer callers.

pub mod services;
