//! Solution model.
//!
//! The unit of data flowing through every operator. This crate only reads
//! [`ParetoIndividual::objectives`] and writes the [`Attributes`]
//! annotations; it never creates or destroys solutions.

mod types;

pub use types::{
    Attributes, BinarySolution, FloatSolution, IntegerSolution, ParetoIndividual,
    PermutationSolution, Solution,
};
