use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

use super::{Communities, renumber};
use crate::Adjacency;

/// Label propagation community detection.
///
/// Every vertex starts with its own label. Each sweep visits the vertices
/// in an order drawn from `rng` and lets each adopt the label most common
/// among its successors and predecessors, so a mutual neighbor votes twice.
/// Ties go to the label seen first (successors in ascending order, then
/// predecessors). Vertices without neighbors keep their label. Stops after
/// a sweep that changes nothing, or after `max_iterations` sweeps.
#[must_use]
#[instrument(skip(adj, rng))]
pub fn label_propagation<R: Rng + ?Sized>(
    adj: &Adjacency,
    max_iterations: usize,
    rng: &mut R,
) -> Communities {
    let n = adj.vertex_count();
    if n == 0 {
        return Communities::new();
    }

    let mut labels: Vec<usize> = (0..n).collect();
    let mut order: Vec<usize> = (0..n).collect();
    let mut sweeps = 0;
    let mut settled = false;

    while sweeps < max_iterations {
        sweeps += 1;
        order.shuffle(rng);

        let mut changed = false;
        for &v in &order {
            let Some(winner) = most_common_label(adj, &labels, v) else {
                continue;
            };
            if labels[v] != winner {
                labels[v] = winner;
                changed = true;
            }
        }

        if !changed {
            settled = true;
            break;
        }
    }

    if settled {
        debug!(sweeps, "label propagation settled");
    } else {
        warn!(sweeps, "label propagation hit max_iterations");
    }

    renumber(&labels.into_iter().enumerate().collect())
}

/// The label carried by most neighbor slots of `v`, or `None` when `v` has
/// no neighbors.
fn most_common_label(adj: &Adjacency, labels: &[usize], v: usize) -> Option<usize> {
    // (label, votes) in first-seen order.
    let mut tally: Vec<(usize, usize)> = Vec::new();
    let mut slot: HashMap<usize, usize> = HashMap::new();

    for &u in adj.successors(v).iter().chain(adj.predecessors(v)) {
        let label = labels[u];
        let idx = *slot.entry(label).or_insert_with(|| {
            tally.push((label, 0));
            tally.len() - 1
        });
        tally[idx].1 += 1;
    }

    let mut best: Option<(usize, usize)> = None;
    for &(label, votes) in &tally {
        if best.is_none_or(|(_, top)| votes > top) {
            best = Some((label, votes));
        }
    }
    best.map(|(label, _)| label)
}
