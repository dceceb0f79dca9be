use std::collections::{BTreeMap, BTreeSet};

use serde::{Serialize, Serializer};

use super::Communities;
use crate::{Adjacency, VertexScores};

/// Per-community size and edge counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommunityStats {
    pub size: usize,
    /// Edges with both endpoints in the community.
    pub internal_edges: usize,
    /// Edges leaving the community (counted on the source side only).
    pub external_edges: usize,
    /// Member vertices, ascending.
    pub members: Vec<usize>,
}

/// Edge counts between pairs of distinct communities, keyed `(low, high)`.
///
/// Direction is discarded: `a → b` and `b → a` both count toward `(a, b)`.
/// Serializes as `[{"communities": [a, b], "edges": n}, ...]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterCommunityEdges(BTreeMap<(usize, usize), usize>);

impl InterCommunityEdges {
    /// Edges between `a` and `b`, in either argument order.
    #[must_use]
    pub fn get(&self, a: usize, b: usize) -> usize {
        self.0.get(&(a.min(b), a.max(b))).copied().unwrap_or(0)
    }

    /// Sum over all community pairs.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), usize)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }
}

#[derive(Serialize)]
struct PairEntry {
    communities: [usize; 2],
    edges: usize,
}

impl Serialize for InterCommunityEdges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(|((a, b), edges)| PairEntry {
            communities: [a, b],
            edges,
        }))
    }
}

/// How many distinct communities each vertex touches, as a share of all
/// communities.
///
/// A vertex's own community counts only if one of its neighbors is in it.
/// Every score is 0 when there is a single community, and the map is empty
/// for an empty assignment.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bridging_ties(adj: &Adjacency, communities: &Communities) -> VertexScores {
    if communities.is_empty() {
        return VertexScores::new();
    }

    let total = communities.values().collect::<BTreeSet<_>>().len();
    (0..adj.vertex_count())
        .map(|v| {
            if total <= 1 {
                return (v, 0.0);
            }
            let touched = adj
                .successors(v)
                .iter()
                .chain(adj.predecessors(v))
                .filter_map(|u| communities.get(u))
                .collect::<BTreeSet<_>>()
                .len();
            (v, touched as f64 / total as f64)
        })
        .collect()
}

/// Count edges crossing between communities. Edges touching an unassigned
/// vertex are skipped.
#[must_use]
pub fn inter_community_edges(adj: &Adjacency, communities: &Communities) -> InterCommunityEdges {
    let mut counts = BTreeMap::new();
    for (u, v) in adj.edges() {
        if let (Some(&a), Some(&b)) = (communities.get(&u), communities.get(&v))
            && a != b
        {
            *counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }
    InterCommunityEdges(counts)
}

/// Size, member list and edge counts of every community.
#[must_use]
pub fn community_statistics(adj: &Adjacency, communities: &Communities) -> BTreeMap<usize, CommunityStats> {
    let mut stats: BTreeMap<usize, CommunityStats> = BTreeMap::new();
    for (&v, &c) in communities {
        let entry = stats.entry(c).or_default();
        entry.size += 1;
        entry.members.push(v);
    }

    for (u, v) in adj.edges() {
        let (Some(&a), Some(&b)) = (communities.get(&u), communities.get(&v)) else {
            continue;
        };
        if let Some(entry) = stats.get_mut(&a) {
            if a == b {
                entry.internal_edges += 1;
            } else {
                entry.external_edges += 1;
            }
        }
    }

    stats
}
