//! Binary tournament under Pareto dominance.

use super::{ensure_not_empty, MatingSelection};
use crate::error::Result;
use crate::pareto::{Dominance, DominanceComparator, ParetoDominance};
use rand::Rng;

/// Binary tournament selection.
///
/// Draws two distinct solutions uniformly at random and returns the one
/// that dominates the other. When neither dominates, a fair coin decides.
/// A population of one returns its sole member without comparing.
///
/// # Complexity
/// O(m) per selection for m objectives
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_pareto::selection::{BinaryTournament, MatingSelection};
/// use u_pareto::solution::FloatSolution;
///
/// let population = vec![
///     FloatSolution::from_parts(vec![], vec![1.0, 4.0]),
///     FloatSolution::from_parts(vec![], vec![0.0, 3.0]),
/// ];
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let winner = BinaryTournament::new().select(&population, &mut rng).unwrap();
/// assert_eq!(winner.objectives, vec![0.0, 3.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BinaryTournament<C = ParetoDominance> {
    comparator: C,
}

impl BinaryTournament<ParetoDominance> {
    /// Tournament using standard Pareto dominance.
    pub fn new() -> Self {
        Self {
            comparator: ParetoDominance,
        }
    }
}

impl<C> BinaryTournament<C> {
    /// Tournament using a custom comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self { comparator }
    }
}

impl<S, C: DominanceComparator<S>> MatingSelection<S> for BinaryTournament<C> {
    fn select_index<R: Rng>(&self, population: &[S], rng: &mut R) -> Result<usize> {
        ensure_not_empty(population)?;

        let n = population.len();
        if n == 1 {
            return Ok(0);
        }

        let first = rng.random_range(0..n);
        let mut second = rng.random_range(0..n - 1);
        if second >= first {
            second += 1;
        }

        let winner = match self.comparator.compare(&population[first], &population[second])? {
            Dominance::Dominates => first,
            Dominance::Dominated => second,
            Dominance::NonDominated => {
                if rng.random_bool(0.5) {
                    first
                } else {
                    second
                }
            }
        };
        Ok(winner)
    }
}
