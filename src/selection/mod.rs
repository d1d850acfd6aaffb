//! Selection operators.
//!
//! Mating selection picks one parent at a time:
//!
//! - [`BinaryTournament`]: pairwise dominance tournament
//! - [`BestSolution`]: first non-dominated solution found by a linear scan
//! - [`RandomSolution`]: uniform pick
//!
//! These share the [`MatingSelection`] trait. Two operators return
//! several solutions:
//!
//! - [`NaryRandomSolution`]: `k` distinct solutions, uniformly without replacement
//! - [`RankingAndCrowdingDistanceSelection`]: NSGA-II environmental selection
//!
//! Every operator rejects an empty population with
//! [`ParetoError::EmptyPopulation`](crate::ParetoError::EmptyPopulation)
//! before doing anything else. Randomness always comes from the caller's
//! RNG; operators keep no state between calls.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"

mod best;
mod environmental;
mod random;
mod tournament;

pub use best::BestSolution;
pub use environmental::RankingAndCrowdingDistanceSelection;
pub use random::{NaryRandomSolution, RandomSolution};
pub use tournament::BinaryTournament;

use crate::error::{ParetoError, Result};
use rand::Rng;

/// Picks a single solution from a population.
pub trait MatingSelection<S> {
    /// Returns the index of the chosen solution.
    ///
    /// # Errors
    ///
    /// [`ParetoError::EmptyPopulation`] if `population` is empty, plus any
    /// operator-specific failure.
    fn select_index<R: Rng>(&self, population: &[S], rng: &mut R) -> Result<usize>;

    /// Returns a reference to the chosen solution.
    fn select<'a, R: Rng>(&self, population: &'a [S], rng: &mut R) -> Result<&'a S> {
        let idx = self.select_index(population, rng)?;
        Ok(&population[idx])
    }
}

fn ensure_not_empty<S>(population: &[S]) -> Result<()> {
    if population.is_empty() {
        return Err(ParetoError::EmptyPopulation);
    }
    Ok(())
}
