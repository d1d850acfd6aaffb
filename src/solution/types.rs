//! Core solution model.
//!
//! [`ParetoIndividual`] is the capability every operator in this crate
//! works through: a readable objective vector plus a writable
//! [`Attributes`] side-table. [`Solution`] is the stock implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Annotations stamped by the ranking and crowding passes.
///
/// Both fields are `None` until the corresponding operator runs and are
/// overwritten on every re-run. They are not part of a solution's identity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attributes {
    /// Index of the front the solution was placed in (0 = non-dominated).
    pub rank: Option<usize>,

    /// Crowding distance within its front. May be `f64::INFINITY`.
    pub crowding_distance: Option<f64>,
}

impl Attributes {
    /// Clears both annotations.
    pub fn clear(&mut self) {
        self.rank = None;
        self.crowding_distance = None;
    }
}

/// A candidate solution that can be ranked and selected.
///
/// All objectives are **minimized**: lower values are better.
///
/// # Implementing
///
/// ```
/// use u_pareto::solution::{Attributes, ParetoIndividual};
///
/// struct Route {
///     stops: Vec<u32>,
///     cost_and_time: [f64; 2],
///     attributes: Attributes,
/// }
///
/// impl ParetoIndividual for Route {
///     fn objectives(&self) -> &[f64] { &self.cost_and_time }
///     fn attributes(&self) -> &Attributes { &self.attributes }
///     fn attributes_mut(&mut self) -> &mut Attributes { &mut self.attributes }
/// }
/// ```
pub trait ParetoIndividual: Send + Sync {
    /// Objective values, one per objective. Fixed length per problem.
    fn objectives(&self) -> &[f64];

    /// Read access to the ranking/crowding annotations.
    fn attributes(&self) -> &Attributes;

    /// Write access to the ranking/crowding annotations.
    fn attributes_mut(&mut self) -> &mut Attributes;

    /// Number of objectives.
    fn number_of_objectives(&self) -> usize {
        self.objectives().len()
    }

    /// Last computed front index, if any.
    fn rank(&self) -> Option<usize> {
        self.attributes().rank
    }

    /// Last computed crowding distance, if any.
    fn crowding_distance(&self) -> Option<f64> {
        self.attributes().crowding_distance
    }
}

/// Stock solution record.
///
/// `V` is the decision variable type. It is opaque to this crate; the
/// external problem definition owns its meaning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution<V> {
    /// Decision variables.
    pub variables: Vec<V>,

    /// Objective values (minimized).
    pub objectives: Vec<f64>,

    /// Constraint violation magnitudes. Not interpreted by this crate.
    pub constraints: Vec<f64>,

    /// Ranking and crowding annotations.
    pub attributes: Attributes,
}

/// Real-coded solution.
pub type FloatSolution = Solution<f64>;

/// Integer-coded solution.
pub type IntegerSolution = Solution<i64>;

/// Binary-coded solution.
pub type BinarySolution = Solution<bool>;

/// Permutation-coded solution.
pub type PermutationSolution = Solution<usize>;

impl<V: Clone + Default> Solution<V> {
    /// Creates a solution with default-valued variables and zeroed objectives.
    pub fn new(number_of_variables: usize, number_of_objectives: usize) -> Self {
        Self {
            variables: vec![V::default(); number_of_variables],
            objectives: vec![0.0; number_of_objectives],
            constraints: Vec::new(),
            attributes: Attributes::default(),
        }
    }
}

impl<V> Solution<V> {
    /// Creates a solution from already evaluated parts.
    pub fn from_parts(variables: Vec<V>, objectives: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
            constraints: Vec::new(),
            attributes: Attributes::default(),
        }
    }

    /// Sets the number of constraints, zero-filling their values.
    pub fn with_constraints(mut self, number_of_constraints: usize) -> Self {
        self.constraints = vec![0.0; number_of_constraints];
        self
    }

    /// Replaces the objective vector.
    pub fn with_objectives(mut self, objectives: Vec<f64>) -> Self {
        self.objectives = objectives;
        self
    }
}

impl<V: Send + Sync> ParetoIndividual for Solution<V> {
    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }
}
