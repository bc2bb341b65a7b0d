// Single source of truth for all default values.

// --- Embedding ---
pub const DEFAULT_EMBEDDING_BACKEND: &str = "hashed";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 2_000;
pub const DEFAULT_QUERY_CACHE_SIZE: u64 = 1_024;
pub const DEFAULT_API_KEY_ENV: &str = "WARDEN_EMBEDDING_API_KEY";

// --- Retrieval ---
pub const DEFAULT_RERANK: bool = true;
pub const DEFAULT_VECTOR_STORE: &str = "memory";

// --- Policy ---
pub const DEFAULT_HIGH_MIN_CONFIDENCE: f64 = 0.85;
pub const DEFAULT_MEDIUM_MIN_CONFIDENCE: f64 = 0.70;
pub const DEFAULT_LOW_MIN_CONFIDENCE: f64 = 0.50;

// --- Audit ---
pub const DEFAULT_AUDIT_BACKEND: &str = "jsonl";
pub const DEFAULT_AUDIT_PATH: &str = "logs/audit.log";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
