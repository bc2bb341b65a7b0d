mod audit_sink;
mod encoder;
mod generator;
mod vector_store;

pub use audit_sink::IAuditSink;
pub use encoder::IEmbeddingEncoder;
pub use generator::IGenerator;
pub use vector_store::IVectorStore;
