//! General-purpose helpers for the Farebell core layer.

pub mod fs;
