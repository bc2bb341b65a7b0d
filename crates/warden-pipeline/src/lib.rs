//! # warden-pipeline
//!
//! The orchestrator that runs one request through every stage:
//!
//! ```text
//! classify → resolve → retrieve → score → gate → (generate) → audit → respond
//! ```
//!
//! A response never leaves [`Pipeline::handle`] unless its audit record was
//! written first.

pub mod generator;
pub mod overrides;
pub mod pipeline;

pub use generator::PlaceholderGenerator;
pub use overrides::OverrideEncoders;
pub use pipeline::Pipeline;
