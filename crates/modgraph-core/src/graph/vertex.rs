//! Per-vertex attributes shared by every edge representation.

use serde::{Deserialize, Serialize};

/// Weights and labels for a fixed number of vertices.
///
/// Attributes are independent of edges: they are never touched by edge
/// insertion or removal. Index validation is the owner's job; out-of-range
/// reads return `None` and out-of-range writes are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexStore {
    weights: Vec<f64>,
    labels: Vec<Option<String>>,
}

impl VertexStore {
    /// Create attributes for `len` vertices: weight `0.0`, no label.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            weights: vec![0.0; len],
            labels: vec![None; len],
        }
    }

    /// Number of vertices covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    #[must_use]
    pub fn weight(&self, v: usize) -> Option<f64> {
        self.weights.get(v).copied()
    }

    pub fn set_weight(&mut self, v: usize, weight: f64) {
        if let Some(slot) = self.weights.get_mut(v) {
            *slot = weight;
        }
    }

    #[must_use]
    pub fn label(&self, v: usize) -> Option<&str> {
        self.labels.get(v).and_then(Option::as_deref)
    }

    pub fn set_label(&mut self, v: usize, label: impl Into<String>) {
        if let Some(slot) = self.labels.get_mut(v) {
            *slot = Some(label.into());
        }
    }

    /// Label for display: the stored label, or `V{index}` when unset.
    #[must_use]
    pub fn display_label(&self, v: usize) -> String {
        self.label(v)
            .map_or_else(|| format!("V{v}"), ToString::to_string)
    }
}
