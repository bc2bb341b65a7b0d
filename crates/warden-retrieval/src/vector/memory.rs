use std::collections::HashMap;

use warden_core::errors::{EmbeddingError, WardenError, WardenResult};
use warden_core::traits::IVectorStore;

use super::rank_key;

/// Exact inner-product index held in memory.
///
/// Vectors live in insertion order; replacing an id keeps its original slot,
/// so tie-breaking stays stable across re-indexing.
#[derive(Debug, Default, Clone)]
pub struct InMemoryVectorStore {
    ids: Vec<String>,
    vectors: Vec<Vec<f32>>,
    slots: HashMap<String, usize>,
    dimensions: Option<usize>,
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dimensionality fixed by the first upsert.
    pub fn dimensions(&self) -> Option<usize> {
        self.dimensions
    }

    fn check_dimensions(&self, actual: usize) -> WardenResult<()> {
        match self.dimensions {
            Some(expected) if expected != actual => {
                Err(EmbeddingError::DimensionMismatch { expected, actual }.into())
            }
            _ => Ok(()),
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl IVectorStore for InMemoryVectorStore {
    fn upsert(&mut self, ids: &[String], vectors: Vec<Vec<f32>>) -> WardenResult<()> {
        if ids.len() != vectors.len() {
            return Err(WardenError::InvalidInput {
                reason: format!("{} ids but {} vectors", ids.len(), vectors.len()),
            });
        }
        let width = self.dimensions.or_else(|| vectors.first().map(Vec::len));
        if let Some(expected) = width {
            if let Some(bad) = vectors.iter().find(|v| v.len() != expected) {
                return Err(EmbeddingError::DimensionMismatch {
                    expected,
                    actual: bad.len(),
                }
                .into());
            }
        }
        self.dimensions = width;

        for (id, vector) in ids.iter().zip(vectors) {
            match self.slots.get(id) {
                Some(&slot) => self.vectors[slot] = vector,
                None => {
                    self.slots.insert(id.clone(), self.ids.len());
                    self.ids.push(id.clone());
                    self.vectors.push(vector);
                }
            }
        }
        Ok(())
    }

    fn search(&self, vector: &[f32], k: usize) -> WardenResult<Vec<(String, f32)>> {
        if self.ids.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        self.check_dimensions(vector.len())?;

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(slot, v)| (slot, dot(vector, v)))
            .collect();
        // Stable: equal scores keep insertion order.
        scored.sort_by(|a, b| rank_key(b.1).total_cmp(&rank_key(a.1)));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(slot, score)| (self.ids[slot].clone(), score))
            .collect())
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn search_orders_by_inner_product() {
        let mut store = InMemoryVectorStore::new();
        store
            .upsert(
                &ids(&["a", "b", "c"]),
                vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![0.7, 0.7]],
            )
            .unwrap();
        let hits = store.search(&[1.0, 0.0], 3).unwrap();
        let order: Vec<&str> = hits.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["a", "c", "b"]);
        assert_eq!(hits[0].1, 1.0);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut store = InMemoryVectorStore::new();
        store
            .upsert(
                &ids(&["z", "y", "x"]),
                vec![vec![0.5, 0.5], vec![0.5, 0.5], vec![0.5, 0.5]],
            )
            .unwrap();
        let hits = store.search(&[1.0, 1.0], 3).unwrap();
        let order: Vec<&str> = hits.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["z", "y", "x"]);
    }

    #[test]
    fn nan_scores_rank_last() {
        let mut store = InMemoryVectorStore::new();
        store
            .upsert(
                &ids(&["a", "b", "c"]),
                vec![vec![f32::NAN, 0.0], vec![1.0, 0.0], vec![0.5, 0.0]],
            )
            .unwrap();
        let hits = store.search(&[1.0, 0.0], 3).unwrap();
        let order: Vec<&str> = hits.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
        assert!(hits[2].1.is_nan());
    }

    #[test]
    fn k_truncates() {
        let mut store = InMemoryVectorStore::new();
        store
            .upsert(&ids(&["a", "b"]), vec![vec![1.0], vec![2.0]])
            .unwrap();
        assert_eq!(store.search(&[1.0], 1).unwrap().len(), 1);
        assert!(store.search(&[1.0], 0).unwrap().is_empty());
        assert_eq!(store.search(&[1.0], 10).unwrap().len(), 2);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut store = InMemoryVectorStore::new();
        store
            .upsert(&ids(&["a", "b"]), vec![vec![1.0], vec![1.0]])
            .unwrap();
        store.upsert(&ids(&["a"]), vec![vec![1.0]]).unwrap();
        assert_eq!(store.len(), 2);
        // "a" keeps slot 0 and still wins the tie.
        assert_eq!(store.search(&[1.0], 1).unwrap()[0].0, "a");

        store.upsert(&ids(&["b"]), vec![vec![3.0]]).unwrap();
        assert_eq!(store.search(&[1.0], 1).unwrap()[0].0, "b");
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let mut store = InMemoryVectorStore::new();
        assert!(store.upsert(&ids(&["a", "b"]), vec![vec![1.0]]).is_err());

        store.upsert(&ids(&["a"]), vec![vec![1.0, 0.0]]).unwrap();
        assert!(store.upsert(&ids(&["b"]), vec![vec![1.0]]).is_err());
        assert!(store.search(&[1.0, 0.0, 0.0], 1).is_err());
        assert_eq!(store.dimensions(), Some(2));
    }

    #[test]
    fn empty_store_returns_nothing() {
        let store = InMemoryVectorStore::new();
        assert!(store.search(&[1.0, 2.0], 5).unwrap().is_empty());
    }
}
