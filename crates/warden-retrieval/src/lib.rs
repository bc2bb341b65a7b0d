//! # warden-retrieval
//!
//! Evidence gathering for the decision pipeline.
//!
//! Keyword overlap decides which knowledge-base documents are candidates;
//! vector similarity only reorders them. Confidence is derived from how much
//! of the knowledge base matched, never from similarity values.

pub mod confidence;
pub mod engine;
pub mod index;
pub mod knowledge;
pub mod tokenize;
pub mod vector;

pub use confidence::ConfidenceScorer;
pub use engine::{QueryEncoder, RetrievalEngine, RetrievalOutcome};
pub use index::RetrievalIndex;
pub use knowledge::KnowledgeBase;
pub use vector::{create_vector_store, InMemoryVectorStore};
