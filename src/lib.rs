//! **R**egularized **R**egression on **R**andom **F**ourier **F**eatures
//!
//! A function approximator which learns a closed-form model from a training set of
//! (input vector, target vector) pairs. Inputs are mapped through a fixed set of randomly
//! parameterized cosine features, and the output weights on top of those features are
//! obtained by ridge regression. This approximates kernel regression with a Gaussian
//! kernel whose bandwidth is given by `gamma`, at the cost of a single linear solve in the
//! number of features.
//!
//! For a starting point, see [`crate::rrff_approximator::RrffApproximator`] and the
//! [`crate::function_approximator::FunctionApproximator`] trait it implements.
//! Randomness is always supplied by the caller, so training is reproducible with a
//! seeded generator.

#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod error;
pub mod params;
pub mod array_utils;
pub mod linalg_utils;
pub mod rand_utils;
pub mod cosine_features;
pub mod least_squares;
pub mod meta_parameters;
pub mod model_parameters;
pub mod matrix_store;
pub mod grid_data;
pub mod function_approximator;
pub mod rrff_approximator;

#[cfg(test)]
pub mod test_utils;
