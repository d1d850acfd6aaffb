//! Best-solution selection.

use super::{ensure_not_empty, MatingSelection};
use crate::error::Result;
use crate::pareto::{Dominance, DominanceComparator, ParetoDominance};
use rand::Rng;

/// Returns a non-dominated member of the population.
///
/// Linear scan keeping a current best. A candidate replaces it only when
/// it dominates it; among mutually non-dominated solutions the first one
/// seen wins. No randomness is used.
///
/// # Complexity
/// O(n * m)
#[derive(Debug, Clone, Default)]
pub struct BestSolution<C = ParetoDominance> {
    comparator: C,
}

impl BestSolution<ParetoDominance> {
    /// Selection using standard Pareto dominance.
    pub fn new() -> Self {
        Self {
            comparator: ParetoDominance,
        }
    }
}

impl<C> BestSolution<C> {
    /// Selection using a custom comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self { comparator }
    }

    /// Deterministic form of [`MatingSelection::select_index`].
    pub fn best_index<S>(&self, population: &[S]) -> Result<usize>
    where
        C: DominanceComparator<S>,
    {
        ensure_not_empty(population)?;

        let mut best = 0;
        for (idx, candidate) in population.iter().enumerate().skip(1) {
            if self.comparator.compare(candidate, &population[best])? == Dominance::Dominates {
                best = idx;
            }
        }
        Ok(best)
    }
}

impl<S, C: DominanceComparator<S>> MatingSelection<S> for BestSolution<C> {
    fn select_index<R: Rng>(&self, population: &[S], _rng: &mut R) -> Result<usize> {
        self.best_index(population)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParetoError;
    use crate::solution::FloatSolution;

    fn make_population(objs: &[[f64; 2]]) -> Vec<FloatSolution> {
        objs.iter()
            .map(|o| FloatSolution::from_parts(vec![], o.to_vec()))
            .collect()
    }

    #[test]
    fn test_empty_population() {
        let pop: Vec<FloatSolution> = vec![];
        assert_eq!(
            BestSolution::new().best_index(&pop),
            Err(ParetoError::EmptyPopulation)
        );
    }

    #[test]
    fn test_single_solution() {
        let pop = make_population(&[[3.0, 2.0]]);
        assert_eq!(BestSolution::new().best_index(&pop), Ok(0));
    }

    #[test]
    fn test_comparator_error_reaches_caller() {
        let pop = vec![
            FloatSolution::from_parts(vec![], vec![1.0, 2.0]),
            FloatSolution::from_parts(vec![], vec![0.0, 1.0]),
            FloatSolution::from_parts(vec![], vec![1.0]),
        ];
        // scan reaches the short vector after replacing the first best
        assert_eq!(
            BestSolution::new().best_index(&pop),
            Err(ParetoError::DimensionMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn test_dominated_pair() {
        let pop = make_population(&[[1.0, 4.0], [0.0, 3.0]]);
        assert_eq!(BestSolution::new().best_index(&pop), Ok(1));
    }

    #[test]
    fn test_first_seen_wins_among_non_dominated() {
        let pop = make_population(&[[1.0, 2.0], [0.0, 3.0]]);
        assert_eq!(BestSolution::new().best_index(&pop), Ok(0));
    }

    #[test]
    fn test_unique_pareto_optimum() {
        let pop = make_population(&[[1.0, 4.0], [0.0, 3.0], [0.0, 4.0], [1.0, 3.0], [0.2, 4.4]]);
        assert_eq!(BestSolution::new().best_index(&pop), Ok(1));
    }

    #[test]
    fn test_dominated_start_is_replaced() {
        // (2,2) is dominated by (1,1); (0,3) trades off with (1,1)
        let pop = make_population(&[[2.0, 2.0], [1.0, 1.0], [0.0, 3.0]]);
        assert_eq!(BestSolution::new().best_index(&pop), Ok(1));
    }
}
