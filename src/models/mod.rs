//! Domain models shared across the pipeline.

pub mod decision;
pub mod snapshot;
