//! Crowding distance assignment for diversity preservation.

use crate::error::{ParetoError, Result};
use crate::solution::ParetoIndividual;

/// Crowding distance over raw objective vectors.
///
/// Measures how spread out the solutions are in objective space. Higher
/// distance means the solution is more isolated (more diverse).
///
/// Boundary solutions (min/max for any objective) receive `f64::INFINITY`.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Stable-sort solutions by objective value
/// 2. Assign infinity to boundary solutions
/// 3. For interior solutions, add normalized distance to neighbors
///
/// An objective whose range is zero contributes nothing.
///
/// # Errors
///
/// [`ParetoError::DimensionMismatch`] if rows differ in length.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_pareto::pareto::crowding_distance;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
/// ];
///
/// let distances = crowding_distance(&objectives).unwrap();
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance(objectives: &[Vec<f64>]) -> Result<Vec<f64>> {
    let rows: Vec<&[f64]> = objectives.iter().map(Vec::as_slice).collect();
    distances(&rows)
}

/// Stamps crowding distance on the members of one front.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrowdingDistance;

impl CrowdingDistance {
    /// Creates the operator.
    pub fn new() -> Self {
        Self
    }

    /// Computes crowding distance for the solutions at `front` (indices
    /// into `population`) and writes it into their attributes.
    ///
    /// Solutions outside `front` are left untouched. An empty front is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// - [`ParetoError::DimensionMismatch`] if front members have objective
    ///   vectors of different lengths
    /// - [`ParetoError::InsufficientElements`] if an index is out of range
    pub fn assign<S: ParetoIndividual>(&self, population: &mut [S], front: &[usize]) -> Result<()> {
        let values = self.compute(population, front)?;

        for (&idx, &d) in front.iter().zip(values.iter()) {
            population[idx].attributes_mut().crowding_distance = Some(d);
        }

        tracing::trace!(front = front.len(), "crowding distance assigned");
        Ok(())
    }

    /// Computes crowding distances for `front` without annotating.
    ///
    /// The returned vector is parallel to `front`.
    pub fn compute<S: ParetoIndividual>(&self, population: &[S], front: &[usize]) -> Result<Vec<f64>> {
        if let Some(&bad) = front.iter().find(|&&i| i >= population.len()) {
            return Err(ParetoError::InsufficientElements {
                requested: bad + 1,
                available: population.len(),
            });
        }

        let rows: Vec<&[f64]> = front.iter().map(|&i| population[i].objectives()).collect();
        distances(&rows)
    }
}

fn distances(objectives: &[&[f64]]) -> Result<Vec<f64>> {
    let Some(first) = objectives.first() else {
        return Ok(Vec::new());
    };

    let m = first.len();
    if let Some(row) = objectives.iter().find(|r| r.len() != m) {
        return Err(ParetoError::DimensionMismatch {
            left: m,
            right: row.len(),
        });
    }

    let n = objectives.len();
    if n <= 2 {
        return Ok(vec![f64::INFINITY; n]);
    }

    let mut distances = vec![0.0f64; n];

    #[allow(clippy::needless_range_loop)] // obj_idx is a column index into 2D data
    for obj_idx in 0..m {
        // Stable: ties keep their prior relative order
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            objectives[a][obj_idx]
                .partial_cmp(&objectives[b][obj_idx])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = objectives[indices[0]][obj_idx];
        let max_val = objectives[indices[n - 1]][obj_idx];
        let range = max_val - min_val;

        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = objectives[indices[i - 1]][obj_idx];
                let next = objectives[indices[i + 1]][obj_idx];
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    Ok(distances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::FloatSolution;

    #[test]
    fn test_crowding_empty() {
        let objs: Vec<Vec<f64>> = vec![];
        assert!(crowding_distance(&objs).unwrap().is_empty());
    }

    #[test]
    fn test_crowding_single() {
        let dist = crowding_distance(&[vec![1.0, 2.0]]).unwrap();
        assert_eq!(dist, vec![f64::INFINITY]);
    }

    #[test]
    fn test_crowding_two() {
        let dist = crowding_distance(&[vec![1.0, 3.0], vec![3.0, 1.0]]).unwrap();
        assert!(dist.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_crowding_evenly_spaced() {
        let objs = vec![
            vec![0.0, 4.0],
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
            vec![4.0, 0.0],
        ];
        let dist = crowding_distance(&objs).unwrap();

        assert!(dist[0].is_infinite());
        assert!(dist[4].is_infinite());

        // each objective contributes 2/4
        for d in &dist[1..4] {
            assert!((d - 1.0).abs() < 1e-10, "expected 1.0, got {d}");
        }
    }

    #[test]
    fn test_crowding_zero_range_objective() {
        let objs = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
        let dist = crowding_distance(&objs).unwrap();
        assert!(dist[0].is_infinite());
        assert!(dist[2].is_infinite());
        assert!((dist[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_crowding_ties_keep_order() {
        // obj0 ties everywhere: first and last by position are boundaries
        let objs = vec![vec![1.0], vec![1.0], vec![1.0], vec![1.0]];
        let dist = crowding_distance(&objs).unwrap();
        assert_eq!(dist, vec![f64::INFINITY, 0.0, 0.0, f64::INFINITY]);
    }

    #[test]
    fn test_crowding_dimension_mismatch() {
        let objs = vec![vec![1.0, 2.0], vec![2.0], vec![3.0, 0.0]];
        assert_eq!(
            crowding_distance(&objs),
            Err(ParetoError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_crowding_dimension_mismatch_in_pair() {
        // degenerate fronts are still checked
        let objs = vec![vec![1.0, 2.0], vec![2.0]];
        assert!(crowding_distance(&objs).is_err());
    }

    #[test]
    fn test_assign_stamps_only_front_members() {
        let mut pop = vec![
            FloatSolution::from_parts(vec![], vec![0.6, 0.6]),
            FloatSolution::from_parts(vec![], vec![1.1, 0.0]),
            FloatSolution::from_parts(vec![], vec![9.0, 9.0]),
            FloatSolution::from_parts(vec![], vec![1.05, 0.1]),
        ];
        CrowdingDistance::new().assign(&mut pop, &[1, 3, 0]).unwrap();

        assert_eq!(pop[0].attributes.crowding_distance, Some(f64::INFINITY));
        assert_eq!(pop[1].attributes.crowding_distance, Some(f64::INFINITY));
        assert_eq!(pop[2].attributes.crowding_distance, None);
        let interior = pop[3].attributes.crowding_distance.unwrap();
        assert!((interior - 2.0).abs() < 1e-9, "got {interior}");
    }

    #[test]
    fn test_assign_empty_front_is_noop() {
        let mut pop = vec![FloatSolution::from_parts(vec![], vec![1.0])];
        CrowdingDistance::new().assign(&mut pop, &[]).unwrap();
        assert_eq!(pop[0].attributes.crowding_distance, None);
    }

    #[test]
    fn test_assign_dimension_mismatch() {
        let mut pop = vec![
            FloatSolution::from_parts(vec![], vec![1.0, 2.0]),
            FloatSolution::from_parts(vec![], vec![1.0]),
            FloatSolution::from_parts(vec![], vec![0.0, 3.0]),
        ];
        assert_eq!(
            CrowdingDistance::new().assign(&mut pop, &[0, 1, 2]),
            Err(ParetoError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn test_assign_index_out_of_range() {
        let mut pop = vec![FloatSolution::from_parts(vec![], vec![1.0])];
        assert!(matches!(
            CrowdingDistance::new().assign(&mut pop, &[0, 3]),
            Err(ParetoError::InsufficientElements { .. })
        ));
    }
}
