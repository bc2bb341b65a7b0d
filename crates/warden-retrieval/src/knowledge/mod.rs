//! The curated document set retrieval runs against.
//!
//! Loaded once at startup, validated, and never mutated afterwards.

mod baseline;

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use tracing::info;
use warden_core::errors::{KnowledgeError, WardenResult};
use warden_core::models::Document;

use crate::tokenize::tokenize;

pub use baseline::baseline_documents;

/// Immutable knowledge base with precomputed token sets.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    documents: Vec<Document>,
    tokens: Vec<BTreeSet<String>>,
}

impl KnowledgeBase {
    /// Validate and index `documents`, keeping their order.
    ///
    /// # Errors
    /// `KnowledgeError::DuplicateId` or `InvalidReliability`.
    pub fn new(documents: Vec<Document>) -> WardenResult<Self> {
        let mut seen = HashSet::with_capacity(documents.len());
        for doc in &documents {
            if !seen.insert(doc.id.as_str()) {
                return Err(KnowledgeError::DuplicateId { id: doc.id.clone() }.into());
            }
            if !(0.0..=1.0).contains(&doc.reliability) {
                return Err(KnowledgeError::InvalidReliability {
                    id: doc.id.clone(),
                    reliability: doc.reliability,
                }
                .into());
            }
        }

        let tokens = documents.iter().map(|d| tokenize(&d.content)).collect();
        Ok(Self { documents, tokens })
    }

    /// The built-in two-document baseline.
    pub fn baseline() -> Self {
        let documents = baseline_documents();
        let tokens = documents.iter().map(|d| tokenize(&d.content)).collect();
        Self { documents, tokens }
    }

    /// Parse a JSON array of documents.
    pub fn from_json(json: &str) -> WardenResult<Self> {
        let documents: Vec<Document> =
            serde_json::from_str(json).map_err(|e| KnowledgeError::ParseFailed {
                reason: e.to_string(),
            })?;
        Self::new(documents)
    }

    /// Read and parse a JSON knowledge-base file.
    pub fn from_file(path: impl AsRef<Path>) -> WardenResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| KnowledgeError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let kb = Self::from_json(&json)?;
        info!(path = %path.display(), documents = kb.len(), "knowledge base loaded");
        Ok(kb)
    }

    /// The file at `path` when given, else the baseline.
    pub fn load(path: Option<&str>) -> WardenResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::baseline()),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Documents paired with their token sets, in load order.
    pub fn indexed(&self) -> impl Iterator<Item = (&Document, &BTreeSet<String>)> {
        self.documents.iter().zip(&self.tokens)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use warden_core::errors::WardenError;

    use super::*;

    fn doc(id: &str, reliability: f64) -> Document {
        Document {
            id: id.to_string(),
            title: id.to_uppercase(),
            content: format!("content of {id}"),
            source: "test".to_string(),
            reliability,
        }
    }

    #[test]
    fn baseline_has_two_documents() {
        let kb = KnowledgeBase::baseline();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.documents()[0].id, "ai_001");
        assert_eq!(kb.documents()[1].id, "ai_002");
    }

    #[test]
    fn token_sets_follow_documents() {
        let kb = KnowledgeBase::baseline();
        let (doc, tokens) = kb.indexed().next().unwrap();
        assert_eq!(doc.id, "ai_001");
        assert!(tokens.contains("intelligence"));
        assert!(tokens.contains("ai"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = KnowledgeBase::new(vec![doc("a", 0.5), doc("a", 0.6)]).unwrap_err();
        assert!(matches!(
            err,
            WardenError::KnowledgeError(KnowledgeError::DuplicateId { ref id }) if id == "a"
        ));
    }

    #[test]
    fn reliability_out_of_range_is_rejected() {
        let err = KnowledgeBase::new(vec![doc("a", 1.5)]).unwrap_err();
        assert!(matches!(
            err,
            WardenError::KnowledgeError(KnowledgeError::InvalidReliability { .. })
        ));
        assert!(KnowledgeBase::new(vec![doc("nan", f64::NAN)]).is_err());
    }

    #[test]
    fn empty_knowledge_base_is_allowed() {
        let kb = KnowledgeBase::new(Vec::new()).unwrap();
        assert!(kb.is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = KnowledgeBase::from_json("{not json").unwrap_err();
        assert!(matches!(
            err,
            WardenError::KnowledgeError(KnowledgeError::ParseFailed { .. })
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = KnowledgeBase::from_file("/nonexistent/kb.json").unwrap_err();
        assert!(matches!(
            err,
            WardenError::KnowledgeError(KnowledgeError::ReadFailed { .. })
        ));
    }

    #[test]
    fn load_without_path_is_baseline() {
        assert_eq!(KnowledgeBase::load(None).unwrap().len(), 2);
    }
}
