//! Pairwise savings scoring.
//!
//! # Algorithm
//!
//! For every ordered pair of loads (i, j), the savings value is the cost
//! saved by serving i then j on one route — linking i's dropoff directly to
//! j's pickup — versus serving each as a round trip from the depot:
//!
//! ```text
//! s(i, j) = d(0, pᵢ) + d(dᵢ, 0) + d(0, pⱼ) + d(dⱼ, 0) − d(dᵢ, pⱼ)
//! ```
//!
//! With the clustering bias enabled, each value is divided by a proximity
//! score: the mean of the four pairwise distances from i's and j's endpoints
//! to every other load k's matching endpoints. Pairs embedded in a dense
//! cluster of near-identical loads get their savings deflated, so the greedy
//! merger consolidates isolated pairs first and spreads cluster pressure
//! across more routes.
//!
//! # Complexity
//!
//! O(n² log n) unbiased, O(n³) with the bias (the k-loop runs per pair).
//! Scoring is parallelized over the outer index with order-preserving
//! collection, so the output is identical across worker counts.

use rayon::prelude::*;

use crate::models::{Load, Point};

/// The savings value for serving load `i` immediately before load `j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsEntry {
    /// Net cost reduction of the i→j link.
    pub value: f64,
    /// Index of the load served first.
    pub i: usize,
    /// Index of the load served second.
    pub j: usize,
}

/// Computes savings for all ordered load pairs, sorted by value descending.
///
/// Ties are broken by ascending pair-generation order (`i`, then `j`), so
/// the result is deterministic for identical input regardless of thread
/// count.
///
/// With fewer than three loads the proximity score has no other load to
/// average over, so `cluster_bias` is inapplicable and values are left
/// unmodified.
///
/// # Examples
///
/// ```
/// use load_dispatch::models::{Load, Point};
/// use load_dispatch::savings::compute_savings;
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(10.0, 0.0)),
///     Load::new(2, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
/// ];
/// let entries = compute_savings(&loads, false);
/// assert_eq!(entries.len(), 2);
/// // linking 1's dropoff to 2's pickup costs nothing, so s(0, 1) is maximal
/// assert_eq!((entries[0].i, entries[0].j), (0, 1));
/// assert!((entries[0].value - 40.0).abs() < 1e-10);
/// ```
pub fn compute_savings(loads: &[Load], cluster_bias: bool) -> Vec<SavingsEntry> {
    let n = loads.len();
    let bias = cluster_bias && n > 2;

    let mut entries: Vec<SavingsEntry> = (0..n)
        .into_par_iter()
        .flat_map_iter(|i| {
            (0..n)
                .filter(move |&j| j != i)
                .map(move |j| score_pair(loads, i, j, bias))
        })
        .collect();

    entries.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.i.cmp(&b.i))
            .then_with(|| a.j.cmp(&b.j))
    });
    entries
}

fn score_pair(loads: &[Load], i: usize, j: usize, bias: bool) -> SavingsEntry {
    let depot = Point::origin();
    let a = &loads[i];
    let b = &loads[j];

    let base = depot.distance_to(a.pickup())
        + a.dropoff().distance_to(depot)
        + depot.distance_to(b.pickup())
        + b.dropoff().distance_to(depot);
    let mut value = base - a.dropoff().distance_to(b.pickup());

    if bias {
        let score = proximity_score(loads, i, j);
        // fully coincident geometry leaves the value unmodified
        if score > 0.0 {
            value /= score;
        }
    }

    SavingsEntry { value, i, j }
}

/// Mean distance from the pair's endpoints to every other load's endpoints.
///
/// Only meaningful for n > 2.
fn proximity_score(loads: &[Load], i: usize, j: usize) -> f64 {
    let n = loads.len();
    let a = &loads[i];
    let b = &loads[j];
    let mut sum = 0.0;
    for (k, other) in loads.iter().enumerate() {
        if k == i || k == j {
            continue;
        }
        sum += a.pickup().distance_to(other.pickup())
            + a.dropoff().distance_to(other.dropoff())
            + b.pickup().distance_to(other.pickup())
            + b.dropoff().distance_to(other.dropoff());
    }
    sum / ((n - 2) * 4) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(id: u64, pickup: (f64, f64), dropoff: (f64, f64)) -> Load {
        Load::new(
            id,
            Point::new(pickup.0, pickup.1),
            Point::new(dropoff.0, dropoff.1),
        )
    }

    #[test]
    fn test_savings_formula() {
        let loads = vec![
            load(1, (0.0, 0.0), (10.0, 0.0)),
            load(2, (10.0, 0.0), (20.0, 0.0)),
        ];
        let entries = compute_savings(&loads, false);
        assert_eq!(entries.len(), 2);
        // s(0,1) = 0 + 10 + 10 + 20 − 0 = 40
        assert_eq!((entries[0].i, entries[0].j), (0, 1));
        assert!((entries[0].value - 40.0).abs() < 1e-10);
        // s(1,0) = 0 + 10 + 10 + 20 − 20 = 20
        assert_eq!((entries[1].i, entries[1].j), (1, 0));
        assert!((entries[1].value - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_descending_order() {
        let loads = vec![
            load(1, (1.0, 0.0), (2.0, 0.0)),
            load(2, (0.0, 3.0), (0.0, 7.0)),
            load(3, (-4.0, 1.0), (-6.0, 2.0)),
        ];
        let entries = compute_savings(&loads, false);
        assert_eq!(entries.len(), 6);
        for pair in entries.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn test_tie_break_ascending_pair_order() {
        // mirrored zero-length loads: s(0,1) = s(1,0) = 4 − 2 = 2
        let loads = vec![
            load(1, (1.0, 0.0), (1.0, 0.0)),
            load(2, (-1.0, 0.0), (-1.0, 0.0)),
        ];
        let entries = compute_savings(&loads, false);
        assert_eq!(entries.len(), 2);
        assert!((entries[0].value - entries[1].value).abs() < 1e-10);
        assert_eq!((entries[0].i, entries[0].j), (0, 1));
        assert_eq!((entries[1].i, entries[1].j), (1, 0));
    }

    #[test]
    fn test_bias_deflates_clustered_pair() {
        let loads = vec![
            load(1, (1.0, 0.0), (1.0, 0.0)),
            load(2, (2.0, 0.0), (2.0, 0.0)),
            load(3, (3.0, 0.0), (3.0, 0.0)),
        ];
        let biased = compute_savings(&loads, true);
        let entry = biased
            .iter()
            .find(|e| e.i == 0 && e.j == 1)
            .expect("pair present");
        // base s(0,1) = 1 + 1 + 2 + 2 − 1 = 5
        // proximity vs load 2: (2 + 2 + 1 + 1) / 4 = 1.5
        assert!((entry.value - 5.0 / 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_bias_inapplicable_for_two_loads() {
        let loads = vec![
            load(1, (1.0, 2.0), (3.0, 4.0)),
            load(2, (5.0, 6.0), (7.0, 8.0)),
        ];
        let biased = compute_savings(&loads, true);
        let unbiased = compute_savings(&loads, false);
        assert_eq!(biased, unbiased);
    }

    #[test]
    fn test_coincident_geometry_leaves_value_unmodified() {
        // every endpoint at the same place: proximity score is exactly 0
        let loads = vec![
            load(1, (2.0, 0.0), (2.0, 0.0)),
            load(2, (2.0, 0.0), (2.0, 0.0)),
            load(3, (2.0, 0.0), (2.0, 0.0)),
        ];
        let entries = compute_savings(&loads, true);
        assert_eq!(entries.len(), 6);
        for entry in &entries {
            assert!(entry.value.is_finite());
            // base = 2 + 2 + 2 + 2 − 0 = 8
            assert!((entry.value - 8.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(compute_savings(&[], true).is_empty());
        let one = vec![load(1, (1.0, 1.0), (2.0, 2.0))];
        assert!(compute_savings(&one, true).is_empty());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let loads: Vec<Load> = (0..20)
            .map(|k| {
                let k = k as f64;
                load(
                    k as u64 + 1,
                    (k * 1.7 - 10.0, (k * 3.1) % 7.0),
                    ((k * 2.3) % 11.0 - 5.0, k * 0.9 - 8.0),
                )
            })
            .collect();
        let first = compute_savings(&loads, true);
        let second = compute_savings(&loads, true);
        assert_eq!(first, second);
    }
}
