//! Fast non-dominated sorting.

use super::dominance::{dominance_cmp, Dominance, DominanceComparator, ParetoDominance};
use crate::error::{ParetoError, Result};
use crate::solution::ParetoIndividual;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of non-dominated sorting over raw objective vectors.
///
/// Each element of `ranks` corresponds to the Pareto rank of the solution
/// at the same index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, PartialEq)]
pub struct NondominatedSortResult {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting over raw objective vectors.
///
/// All objectives are **minimized**: lower values are better.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For each pair of solutions, determine dominance
/// 2. Solutions dominated by no other belong to front 0 (rank 0)
/// 3. Remove front 0, repeat to find subsequent fronts
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Errors
///
/// - [`ParetoError::EmptyPopulation`] if `objectives` is empty
/// - [`ParetoError::DimensionMismatch`] if inner slices differ in length
///
/// # Example
///
/// ```
/// use u_pareto::pareto::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 5.0],  // Solution A
///     vec![3.0, 3.0],  // Solution B
///     vec![5.0, 1.0],  // Solution C
///     vec![4.0, 4.0],  // Solution D, dominated by B
/// ];
///
/// let result = non_dominated_sort(&objectives).unwrap();
///
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// ```
pub fn non_dominated_sort(objectives: &[Vec<f64>]) -> Result<NondominatedSortResult> {
    let (ranks, fronts) = fast_non_dominated_sort(objectives.len(), |i, j| {
        dominance_cmp(&objectives[i], &objectives[j])
    })?;
    Ok(NondominatedSortResult { ranks, fronts })
}

/// Fronts produced by [`NonDominatedRanking::rank`].
///
/// Fronts are index views into the ranked population; nothing is copied.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    ranks: Vec<usize>,
    fronts: Vec<Vec<usize>>,
}

impl Ranking {
    /// Number of fronts.
    pub fn number_of_subfronts(&self) -> usize {
        self.fronts.len()
    }

    /// Indices of the solutions in front `rank`, if it exists.
    pub fn subfront(&self, rank: usize) -> Option<&[usize]> {
        self.fronts.get(rank).map(Vec::as_slice)
    }

    /// All fronts in rank order.
    pub fn fronts(&self) -> &[Vec<usize>] {
        &self.fronts
    }

    /// Rank of every solution, indexed like the population.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Rank of the solution at `index`.
    pub fn rank_of(&self, index: usize) -> Option<usize> {
        self.ranks.get(index).copied()
    }

    /// Consumes the ranking and returns its fronts.
    pub fn into_fronts(self) -> Vec<Vec<usize>> {
        self.fronts
    }
}

/// Partitions a population into fronts and stamps each solution's rank.
///
/// # Example
///
/// ```
/// use u_pareto::pareto::NonDominatedRanking;
/// use u_pareto::solution::{FloatSolution, ParetoIndividual};
///
/// let mut population = vec![
///     FloatSolution::from_parts(vec![], vec![1.0, 1.0]),
///     FloatSolution::from_parts(vec![], vec![2.0, 2.0]),
/// ];
///
/// let ranking = NonDominatedRanking::new().rank(&mut population).unwrap();
/// assert_eq!(ranking.number_of_subfronts(), 2);
/// assert_eq!(population[1].rank(), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NonDominatedRanking<C = ParetoDominance> {
    comparator: C,
}

impl NonDominatedRanking<ParetoDominance> {
    /// Ranking with standard Pareto dominance.
    pub fn new() -> Self {
        Self {
            comparator: ParetoDominance,
        }
    }
}

impl<C> NonDominatedRanking<C> {
    /// Ranking with a custom comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self { comparator }
    }

    /// The comparator in use.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Ranks `population`, writing `rank` into every solution's attributes.
    ///
    /// Front 0 lists its members in population order; later fronts list
    /// members in the order their last dominator released them.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::EmptyPopulation`] if `population` is empty
    /// - any error returned by the comparator
    pub fn rank<S>(&self, population: &mut [S]) -> Result<Ranking>
    where
        S: ParetoIndividual,
        C: DominanceComparator<S>,
    {
        let view: &[S] = population;
        let (ranks, fronts) = fast_non_dominated_sort(view.len(), |i, j| {
            self.comparator.compare(&view[i], &view[j])
        })?;

        for (solution, &rank) in population.iter_mut().zip(ranks.iter()) {
            solution.attributes_mut().rank = Some(rank);
        }

        tracing::debug!(
            population = population.len(),
            fronts = fronts.len(),
            front_0 = fronts[0].len(),
            "non-dominated ranking complete"
        );

        Ok(Ranking { ranks, fronts })
    }
}

/// Shared fast non-dominated sort over `n` items and a pairwise comparison.
///
/// `cmp(i, j)` reports how item `i` relates to item `j`.
fn fast_non_dominated_sort<F>(n: usize, cmp: F) -> Result<(Vec<usize>, Vec<Vec<usize>>)>
where
    F: Fn(usize, usize) -> Result<Dominance> + Sync,
{
    if n == 0 {
        return Err(ParetoError::EmptyPopulation);
    }

    if n == 1 {
        return Ok((vec![0], vec![vec![0]]));
    }

    let (mut domination_count, dominated_by) = dominance_relations(n, &cmp)?;
    let mut ranks = vec![0usize; n];

    let front_0: Vec<usize> = (0..n).filter(|&i| domination_count[i] == 0).collect();

    // Build subsequent fronts
    let mut fronts = vec![front_0];
    loop {
        let mut next_front = Vec::new();

        if let Some(current) = fronts.last() {
            for &i in current {
                for &j in &dominated_by[i] {
                    domination_count[j] -= 1;
                    if domination_count[j] == 0 {
                        ranks[j] = fronts.len();
                        next_front.push(j);
                    }
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    Ok((ranks, fronts))
}

/// Dominance count and dominated set per item.
///
/// Both paths push into `dominated_by[i]` in ascending index order, so the
/// resulting fronts are identical with or without the `parallel` feature.
#[cfg(not(feature = "parallel"))]
fn dominance_relations<F>(n: usize, cmp: &F) -> Result<(Vec<usize>, Vec<Vec<usize>>)>
where
    F: Fn(usize, usize) -> Result<Dominance>,
{
    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];

    for i in 0..n {
        for j in (i + 1)..n {
            match cmp(i, j)? {
                Dominance::Dominates => {
                    // i dominates j
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Dominated => {
                    // j dominates i
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::NonDominated => {}
            }
        }
    }

    Ok((domination_count, dominated_by))
}

#[cfg(feature = "parallel")]
fn dominance_relations<F>(n: usize, cmp: &F) -> Result<(Vec<usize>, Vec<Vec<usize>>)>
where
    F: Fn(usize, usize) -> Result<Dominance> + Sync,
{
    // Each row scans the full population; twice the comparisons of the
    // sequential path, but rows are independent.
    let rows: Vec<(usize, Vec<usize>)> = (0..n)
        .into_par_iter()
        .map(|i| -> Result<(usize, Vec<usize>)> {
            let mut count = 0usize;
            let mut dominated = Vec::new();
            for j in (0..n).filter(|&j| j != i) {
                match cmp(i, j)? {
                    Dominance::Dominates => dominated.push(j),
                    Dominance::Dominated => count += 1,
                    Dominance::NonDominated => {}
                }
            }
            Ok((count, dominated))
        })
        .collect::<Result<_>>()?;

    Ok(rows.into_iter().unzip())
}
