//! # warden-embeddings
//!
//! Text-to-vector encoders used to re-rank retrieval candidates.
//!
//! Backends are chosen by name through [`create_encoder`]:
//! - `"hashed"`: deterministic term-hashing encoder, no external dependencies
//! - `"onnx"`: local ONNX Runtime model
//! - `"api"`: OpenAI-compatible HTTP embedding endpoint
//! - `"none"`: no encoder, retrieval stays in keyword order
//!
//! Every encoder the registry hands out is wrapped in a [`CachedEncoder`] so
//! repeated queries skip inference.

pub mod cache;
pub mod providers;
pub mod registry;

pub use cache::{CachedEncoder, QueryCache};
pub use providers::{ApiProvider, HashedEncoder, OnnxProvider};
pub use registry::{create_encoder, BACKEND_NAMES};
