//! Pareto dominance, non-dominated ranking, and crowding distance.
//!
//! Domain-agnostic building blocks of NSGA-II style algorithms. All
//! objectives are **minimized**.
//!
//! # Algorithms
//!
//! - [`dominance_cmp`] / [`DominanceComparator`]: pairwise Pareto comparison
//! - [`non_dominated_sort`] / [`NonDominatedRanking`]: fast non-dominated sorting
//! - [`crowding_distance`] / [`CrowdingDistance`]: crowding distance within a front
//!
//! The free functions work on raw objective vectors; the operator types
//! work on any [`ParetoIndividual`](crate::solution::ParetoIndividual) and
//! stamp the results into its attributes.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

mod crowding;
mod dominance;
mod ranking;

pub use crowding::{crowding_distance, CrowdingDistance};
pub use dominance::{dominance_cmp, Dominance, DominanceComparator, ParetoDominance};
pub use ranking::{non_dominated_sort, NonDominatedRanking, NondominatedSortResult, Ranking};
