use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use super::{Communities, renumber};
use crate::Adjacency;

/// Greedy modularity optimization by local moves.
///
/// Starts from singletons. Each sweep visits the vertices in an order drawn
/// from `rng`; a vertex with neighbors is lifted out of its community and
/// placed in whichever neighboring community (ascending id) strictly
/// raises modularity the most over leaving it out. If none does, the
/// vertex returns where it was. Stops after a sweep without moves or after
/// `max_iterations` sweeps. A graph without edges stays all singletons.
///
/// Gains are evaluated from per-community degree totals, so one sweep costs
/// O(V + E) rather than a full modularity evaluation per candidate.
#[must_use]
#[instrument(skip(adj, rng))]
pub fn greedy_modularity<R: Rng + ?Sized>(
    adj: &Adjacency,
    max_iterations: usize,
    rng: &mut R,
) -> Communities {
    let n = adj.vertex_count();
    if n == 0 {
        return Communities::new();
    }
    if adj.edge_count() == 0 {
        return (0..n).map(|v| (v, v)).collect();
    }

    let m = adj.edge_count();
    let mut membership: Vec<usize> = (0..n).collect();
    // Per community: Σ out-degree, Σ in-degree of its members.
    let mut k_out: Vec<usize> = (0..n).map(|v| adj.out_degree(v)).collect();
    let mut k_in: Vec<usize> = (0..n).map(|v| adj.in_degree(v)).collect();

    let mut order: Vec<usize> = (0..n).collect();
    let mut improved = true;
    let mut sweeps = 0;

    while improved && sweeps < max_iterations {
        improved = false;
        sweeps += 1;
        order.shuffle(rng);

        for &v in &order {
            let links = links_by_community(adj, &membership, v);
            if links.is_empty() {
                continue;
            }

            let current = membership[v];
            let (v_out, v_in) = (adj.out_degree(v), adj.in_degree(v));
            k_out[current] -= v_out;
            k_in[current] -= v_in;

            let mut best = current;
            let mut best_gain = 0_i128;
            for (&c, &l) in &links {
                let gain = scaled_gain(l, m, v_out, v_in, k_out[c], k_in[c]);
                if gain > best_gain {
                    best = c;
                    best_gain = gain;
                }
            }

            membership[v] = best;
            k_out[best] += v_out;
            k_in[best] += v_in;
            if best != current {
                improved = true;
            }
        }
    }

    debug!(sweeps, converged = !improved, "greedy modularity finished");

    renumber(&membership.into_iter().enumerate().collect())
}

/// Edges between `v` and each neighboring community, both directions.
fn links_by_community(adj: &Adjacency, membership: &[usize], v: usize) -> BTreeMap<usize, usize> {
    let mut links = BTreeMap::new();
    for &u in adj.successors(v).iter().chain(adj.predecessors(v)) {
        *links.entry(membership[u]).or_insert(0) += 1;
    }
    links
}

/// `m²` times the modularity change of adding a detached vertex to a
/// community. Integer arithmetic keeps comparisons exact.
///
/// `links` counts edges between the vertex and the community in either
/// direction; the expected term grows by
/// `v_out·K_in + K_out·v_in + v_out·v_in` over `m`.
#[allow(clippy::cast_possible_wrap)]
const fn scaled_gain(links: usize, m: usize, v_out: usize, v_in: usize, c_out: usize, c_in: usize) -> i128 {
    let observed = links as i128 * m as i128;
    let expected = (v_out * c_in + c_out * v_in + v_out * v_in) as i128;
    observed - expected
}
