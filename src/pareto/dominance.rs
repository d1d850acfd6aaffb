//! Pairwise Pareto comparison.

use crate::error::{ParetoError, Result};
use crate::solution::ParetoIndividual;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of comparing `a` against `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Dominance {
    /// `a` dominates `b`.
    Dominates,
    /// `b` dominates `a`.
    Dominated,
    /// Neither dominates the other (includes identical vectors).
    NonDominated,
}

impl Dominance {
    /// The outcome seen from the other side of the comparison.
    pub fn reverse(self) -> Self {
        match self {
            Dominance::Dominates => Dominance::Dominated,
            Dominance::Dominated => Dominance::Dominates,
            Dominance::NonDominated => Dominance::NonDominated,
        }
    }
}

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// `a` dominates `b` when it is no worse in every objective and strictly
/// better in at least one.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`] if the vectors differ in length.
///
/// # Example
///
/// ```
/// use u_pareto::pareto::{dominance_cmp, Dominance};
///
/// assert_eq!(dominance_cmp(&[1.0, 2.0], &[2.0, 2.0]).unwrap(), Dominance::Dominates);
/// assert_eq!(dominance_cmp(&[1.0, 3.0], &[2.0, 2.0]).unwrap(), Dominance::NonDominated);
/// ```
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Result<Dominance> {
    if a.len() != b.len() {
        return Err(ParetoError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    Ok(match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Dominates,
        (false, true) => Dominance::Dominated,
        _ => Dominance::NonDominated,
    })
}

/// Strategy for comparing two solutions.
///
/// Ranking and the dominance-based selection operators take one of these
/// so that callers can plug in alternative orderings. [`ParetoDominance`]
/// is the standard one.
pub trait DominanceComparator<S>: Send + Sync {
    /// Compares `a` against `b`.
    fn compare(&self, a: &S, b: &S) -> Result<Dominance>;
}

/// Plain Pareto dominance over [`ParetoIndividual::objectives`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParetoDominance;

impl<S: ParetoIndividual> DominanceComparator<S> for ParetoDominance {
    fn compare(&self, a: &S, b: &S) -> Result<Dominance> {
        dominance_cmp(a.objectives(), b.objectives())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::FloatSolution;

    #[test]
    fn test_strict_dominance() {
        assert_eq!(
            dominance_cmp(&[1.0, 1.0], &[2.0, 2.0]).unwrap(),
            Dominance::Dominates
        );
        assert_eq!(
            dominance_cmp(&[2.0, 2.0], &[1.0, 1.0]).unwrap(),
            Dominance::Dominated
        );
    }

    #[test]
    fn test_weak_dominance_with_tie() {
        // equal in obj0, better in obj1
        assert_eq!(
            dominance_cmp(&[1.0, 0.0], &[1.0, 0.5]).unwrap(),
            Dominance::Dominates
        );
    }

    #[test]
    fn test_trade_off_is_non_dominated() {
        assert_eq!(
            dominance_cmp(&[1.0, 3.0], &[3.0, 1.0]).unwrap(),
            Dominance::NonDominated
        );
    }

    #[test]
    fn test_identical_is_non_dominated() {
        assert_eq!(
            dominance_cmp(&[2.0, 2.0], &[2.0, 2.0]).unwrap(),
            Dominance::NonDominated
        );
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            dominance_cmp(&[1.0, 2.0], &[1.0]),
            Err(ParetoError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_reverse() {
        assert_eq!(Dominance::Dominates.reverse(), Dominance::Dominated);
        assert_eq!(Dominance::Dominated.reverse(), Dominance::Dominates);
        assert_eq!(Dominance::NonDominated.reverse(), Dominance::NonDominated);
    }

    #[test]
    fn test_comparator_on_solutions() {
        let a = FloatSolution::new(2, 2).with_objectives(vec![0.0, 3.0]);
        let b = FloatSolution::new(2, 2).with_objectives(vec![1.0, 4.0]);
        assert_eq!(ParetoDominance.compare(&a, &b).unwrap(), Dominance::Dominates);
        assert_eq!(ParetoDominance.compare(&b, &a).unwrap(), Dominance::Dominated);
    }
}
