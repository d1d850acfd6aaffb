//! Uniform random selection.

use super::{ensure_not_empty, MatingSelection};
use crate::error::{ParetoError, Result};
use rand::seq::index;
use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns one solution chosen uniformly at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomSolution;

impl RandomSolution {
    /// Creates the operator.
    pub fn new() -> Self {
        Self
    }
}

impl<S> MatingSelection<S> for RandomSolution {
    fn select_index<R: Rng>(&self, population: &[S], rng: &mut R) -> Result<usize> {
        ensure_not_empty(population)?;
        Ok(rng.random_range(0..population.len()))
    }
}

/// Returns `k` distinct solutions chosen uniformly without replacement.
///
/// The result is always a `Vec`, even for `k = 1`.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use u_pareto::selection::NaryRandomSolution;
/// use u_pareto::solution::FloatSolution;
/// use u_pareto::ParetoError;
///
/// let population = vec![FloatSolution::new(1, 1), FloatSolution::new(1, 1)];
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let err = NaryRandomSolution::new(4).execute(&population, &mut rng).unwrap_err();
/// assert_eq!(err, ParetoError::InsufficientElements { requested: 4, available: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NaryRandomSolution {
    number_of_solutions_to_be_returned: usize,
}

impl Default for NaryRandomSolution {
    fn default() -> Self {
        Self {
            number_of_solutions_to_be_returned: 1,
        }
    }
}

impl NaryRandomSolution {
    /// Operator returning `number_of_solutions_to_be_returned` solutions per call.
    pub fn new(number_of_solutions_to_be_returned: usize) -> Self {
        Self {
            number_of_solutions_to_be_returned,
        }
    }

    /// Number of solutions returned per call.
    pub fn number_of_solutions_to_be_returned(&self) -> usize {
        self.number_of_solutions_to_be_returned
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<()> {
        if self.number_of_solutions_to_be_returned == 0 {
            return Err(ParetoError::InvalidConfiguration(
                "number_of_solutions_to_be_returned must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Indices of the chosen solutions, all distinct.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::EmptyPopulation`] if `population` is empty
    /// - [`ParetoError::InvalidConfiguration`] if the operator asks for zero solutions
    /// - [`ParetoError::InsufficientElements`] if `population` is smaller than requested
    pub fn select_indices<S, R: Rng>(&self, population: &[S], rng: &mut R) -> Result<Vec<usize>> {
        ensure_not_empty(population)?;
        self.validate()?;

        let k = self.number_of_solutions_to_be_returned;
        if population.len() < k {
            return Err(ParetoError::InsufficientElements {
                requested: k,
                available: population.len(),
            });
        }

        Ok(index::sample(rng, population.len(), k).into_vec())
    }

    /// References to the chosen solutions. See [`select_indices`](Self::select_indices).
    pub fn execute<'a, S, R: Rng>(&self, population: &'a [S], rng: &mut R) -> Result<Vec<&'a S>> {
        let indices = self.select_indices(population, rng)?;
        Ok(indices.into_iter().map(|i| &population[i]).collect())
    }
}
