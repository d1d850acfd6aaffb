//! Pareto ranking, crowding distance, and selection operators for
//! multi-objective evolutionary algorithms.
//!
//! Provides the selection core of NSGA-II style algorithms:
//!
//! - **Dominance**: Pairwise Pareto comparison of objective vectors.
//! - **Non-dominated ranking**: Partitions a population into ordered
//!   fronts (Deb et al. fast non-dominated sort).
//! - **Crowding distance**: Diversity measure of each solution within
//!   its front.
//! - **Selection**: Binary tournament, best solution, random and n-ary
//!   random picks for mating, plus ranking-and-crowding environmental
//!   selection for survivor truncation.
//!
//! All objectives are **minimized**.
//!
//! # Architecture
//!
//! Operators are generic over [`solution::ParetoIndividual`], which only
//! requires a readable objective vector and a writable
//! [`solution::Attributes`] side-table. Problem evaluation, variation
//! operators, and the generational loop belong to the caller. Random
//! sources are passed in per call; no operator owns global state.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use u_pareto::selection::{BinaryTournament, MatingSelection, RankingAndCrowdingDistanceSelection};
//! use u_pareto::solution::FloatSolution;
//!
//! let mut population: Vec<FloatSolution> = [[1.0, 5.0], [3.0, 3.0], [5.0, 1.0], [4.0, 4.0]]
//!     .iter()
//!     .map(|o| FloatSolution::from_parts(vec![], o.to_vec()))
//!     .collect();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let parent = BinaryTournament::new().select(&population, &mut rng).unwrap();
//! assert!(population.iter().any(|s| std::ptr::eq(s, parent)));
//!
//! let survivors = RankingAndCrowdingDistanceSelection::new(3)
//!     .execute(&mut population)
//!     .unwrap();
//! assert_eq!(survivors.len(), 3);
//! assert!(survivors.iter().all(|s| s.attributes.rank == Some(0)));
//! ```

pub mod error;
pub mod pareto;
pub mod selection;
pub mod solution;

pub use error::{ParetoError, Result};
