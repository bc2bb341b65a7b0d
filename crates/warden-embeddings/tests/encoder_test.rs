//! Registry-built encoders: determinism and vector shape.

use proptest::prelude::*;
use warden_core::config::EmbeddingConfig;
use warden_embeddings::create_encoder;

fn hashed(dimensions: usize) -> std::sync::Arc<dyn warden_core::traits::IEmbeddingEncoder> {
    let cfg = EmbeddingConfig {
        dimensions,
        ..EmbeddingConfig::default()
    };
    create_encoder(&cfg).unwrap().unwrap()
}

#[test]
fn index_and_query_vectors_agree() {
    let encoder = hashed(384);
    let docs = vec![
        "Artificial Intelligence refers to computer systems".to_string(),
        "packet switching splits messages".to_string(),
    ];
    let doc_vectors = encoder.encode(&docs).unwrap();
    let query = encoder.encode_one(&docs[0]).unwrap();
    assert_eq!(query, doc_vectors[0]);
}

#[test]
fn separately_built_encoders_agree() {
    let a = hashed(128).encode_one("what is artificial intelligence").unwrap();
    let b = hashed(128).encode_one("what is artificial intelligence").unwrap();
    assert_eq!(a, b);
}

proptest! {
    #[test]
    fn vectors_have_configured_length_and_bounded_norm(
        text in "[a-zA-Z0-9 ,.?]{0,80}",
        dims in 1usize..512,
    ) {
        let v = hashed(dims).encode_one(&text).unwrap();
        prop_assert_eq!(v.len(), dims);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(norm == 0.0 || (norm - 1.0).abs() < 1e-4);
    }
}
