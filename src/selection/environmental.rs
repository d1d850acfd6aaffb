//! NSGA-II environmental selection.

use super::ensure_not_empty;
use crate::error::{ParetoError, Result};
use crate::pareto::{CrowdingDistance, DominanceComparator, NonDominatedRanking, ParetoDominance};
use crate::solution::ParetoIndividual;

/// Truncates a population to `max_population_size` survivors.
///
/// Whole fronts are taken in rank order while they fit. The first front
/// that does not fit is sorted by crowding distance (descending, ties in
/// front order) and only its top members fill the remaining slots; later
/// fronts are dropped.
///
/// Every solution gets its `rank` stamped. Every front that contributes
/// survivors also gets its `crowding_distance` stamped.
///
/// # Example
///
/// ```
/// use u_pareto::selection::RankingAndCrowdingDistanceSelection;
/// use u_pareto::solution::FloatSolution;
///
/// let mut population: Vec<FloatSolution> = [
///     [1.0, 0.0], [0.6, 0.6], [0.5, 0.5], [1.1, 0.0], [0.0, 1.0], [1.05, 0.1],
/// ]
/// .iter()
/// .map(|o| FloatSolution::from_parts(vec![], o.to_vec()))
/// .collect();
///
/// let survivors = RankingAndCrowdingDistanceSelection::new(5)
///     .select_indices(&mut population)
///     .unwrap();
/// assert_eq!(survivors, vec![0, 2, 4, 3, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct RankingAndCrowdingDistanceSelection<C = ParetoDominance> {
    max_population_size: usize,
    ranking: NonDominatedRanking<C>,
    crowding: CrowdingDistance,
}

impl RankingAndCrowdingDistanceSelection<ParetoDominance> {
    /// Selection using standard Pareto dominance.
    pub fn new(max_population_size: usize) -> Self {
        Self::with_comparator(max_population_size, ParetoDominance)
    }
}

impl<C> RankingAndCrowdingDistanceSelection<C> {
    /// Selection ranking with a custom comparator.
    pub fn with_comparator(max_population_size: usize, comparator: C) -> Self {
        Self {
            max_population_size,
            ranking: NonDominatedRanking::with_comparator(comparator),
            crowding: CrowdingDistance::new(),
        }
    }

    /// Upper bound on the number of survivors.
    pub fn max_population_size(&self) -> usize {
        self.max_population_size
    }

    /// The comparator used for ranking.
    pub fn comparator(&self) -> &C {
        self.ranking.comparator()
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<()> {
        if self.max_population_size == 0 {
            return Err(ParetoError::InvalidConfiguration(
                "max_population_size must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Indices of the survivors in selection order.
    ///
    /// Returns `min(max_population_size, population.len())` indices.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::EmptyPopulation`] if `population` is empty
    /// - [`ParetoError::InvalidConfiguration`] if `max_population_size` is 0
    /// - any error raised while ranking or computing crowding distance
    pub fn select_indices<S>(&self, population: &mut [S]) -> Result<Vec<usize>>
    where
        S: ParetoIndividual,
        C: DominanceComparator<S>,
    {
        ensure_not_empty(population)?;
        self.validate()?;

        let ranking = self.ranking.rank(population)?;
        let target = self.max_population_size.min(population.len());
        let mut selected = Vec::with_capacity(target);

        for (rank, front) in ranking.fronts().iter().enumerate() {
            let remaining = target - selected.len();
            if remaining == 0 {
                break;
            }

            self.crowding.assign(population, front)?;

            if front.len() <= remaining {
                selected.extend_from_slice(front);
                continue;
            }

            let mut cut = front.clone();
            cut.sort_by(|&a, &b| {
                let da = population[a].crowding_distance().unwrap_or(0.0);
                let db = population[b].crowding_distance().unwrap_or(0.0);
                db.partial_cmp(&da).unwrap_or(std::cmp::Ordering::Equal)
            });
            selected.extend_from_slice(&cut[..remaining]);

            tracing::debug!(
                rank,
                front = front.len(),
                kept = remaining,
                "front truncated by crowding distance"
            );
            break;
        }

        tracing::debug!(
            population = population.len(),
            selected = selected.len(),
            fronts = ranking.number_of_subfronts(),
            "environmental selection complete"
        );

        Ok(selected)
    }

    /// References to the survivors in selection order.
    ///
    /// See [`select_indices`](Self::select_indices).
    pub fn execute<'a, S>(&self, population: &'a mut [S]) -> Result<Vec<&'a S>>
    where
        S: ParetoIndividual,
        C: DominanceComparator<S>,
    {
        let indices = self.select_indices(population)?;
        let population: &'a [S] = population;
        Ok(indices.into_iter().map(|i| &population[i]).collect())
    }
}
