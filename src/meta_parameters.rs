use serde::{Serialize, Deserialize};

use std::convert::TryFrom;

use crate::error::*;
use crate::params::*;

///The fixed configuration of a random-feature regression approximator,
///supplied at construction and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MetaParametersData")]
pub struct MetaParameters {
    expected_input_dim : usize,
    number_of_basis_functions : usize,
    gamma : f64,
    regularization : f64
}

//Unchecked serialized form, only turned into MetaParameters through MetaParameters::new
#[derive(Deserialize)]
struct MetaParametersData {
    expected_input_dim : usize,
    number_of_basis_functions : usize,
    gamma : f64,
    regularization : f64
}

impl TryFrom<MetaParametersData> for MetaParameters {
    type Error = ApproximatorError;

    fn try_from(data : MetaParametersData) -> Result<MetaParameters, ApproximatorError> {
        MetaParameters::new(data.expected_input_dim, data.number_of_basis_functions,
                            data.gamma, data.regularization)
    }
}

impl MetaParameters {
    ///Constructs [`MetaParameters`], checking that the number of basis functions and
    ///the input dimension are positive, `gamma` is positive and `regularization` is
    ///non-negative.
    pub fn new(expected_input_dim : usize, number_of_basis_functions : usize,
               gamma : f64, regularization : f64) -> Result<MetaParameters, ApproximatorError> {
        if (expected_input_dim == 0) {
            return Result::Err(ApproximatorError::invalid_meta_parameter("expected_input_dim",
                                                                          "must be positive"));
        }
        if (number_of_basis_functions == 0) {
            return Result::Err(ApproximatorError::invalid_meta_parameter("number_of_basis_functions",
                                                                          "must be positive"));
        }
        if (!gamma.is_finite() || gamma <= 0.0f64) {
            return Result::Err(ApproximatorError::invalid_meta_parameter("gamma",
                                   format!("must be finite and positive, got {}", gamma)));
        }
        if (!regularization.is_finite() || regularization < 0.0f64) {
            return Result::Err(ApproximatorError::invalid_meta_parameter("regularization",
                                   format!("must be finite and non-negative, got {}", regularization)));
        }
        Result::Ok(MetaParameters {
            expected_input_dim,
            number_of_basis_functions,
            gamma,
            regularization
        })
    }

    pub fn with_defaults(expected_input_dim : usize) -> Result<MetaParameters, ApproximatorError> {
        MetaParameters::new(expected_input_dim, DEFAULT_NUMBER_OF_BASIS_FUNCTIONS,
                            DEFAULT_GAMMA, DEFAULT_REGULARIZATION)
    }

    pub fn get_expected_input_dim(&self) -> usize {
        self.expected_input_dim
    }
    pub fn get_number_of_basis_functions(&self) -> usize {
        self.number_of_basis_functions
    }
    pub fn get_gamma(&self) -> f64 {
        self.gamma
    }
    pub fn get_regularization(&self) -> f64 {
        self.regularization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let meta = MetaParameters::with_defaults(3).unwrap();
        assert_eq!(meta.get_expected_input_dim(), 3);
        assert_eq!(meta.get_number_of_basis_functions(), DEFAULT_NUMBER_OF_BASIS_FUNCTIONS);
        assert_eq!(meta.get_gamma(), DEFAULT_GAMMA);
        assert_eq!(meta.get_regularization(), DEFAULT_REGULARIZATION);
    }

    #[test]
    fn zero_regularization_is_allowed() {
        assert!(MetaParameters::new(1, 10, 1.0, 0.0).is_ok());
    }

    #[test]
    fn serialized_meta_parameters_read_back() {
        let meta = MetaParameters::new(2, 15, 0.5, 0.01).unwrap();
        let serialized = serde_json::to_string(&meta).unwrap();
        let deserialized : MetaParameters = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, meta);
    }

    #[test]
    fn deserializing_negative_regularization_fails() {
        let payload = r#"{"expected_input_dim":1,"number_of_basis_functions":10,"gamma":1.0,"regularization":-0.5}"#;
        let result = serde_json::from_str::<MetaParameters>(payload);
        assert!(result.is_err());
    }

    #[test]
    fn deserializing_zero_basis_functions_fails() {
        let payload = r#"{"expected_input_dim":1,"number_of_basis_functions":0,"gamma":1.0,"regularization":0.1}"#;
        let result = serde_json::from_str::<MetaParameters>(payload);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_bad_values() {
        let cases = vec![
            MetaParameters::new(0, 10, 1.0, 0.1),
            MetaParameters::new(1, 0, 1.0, 0.1),
            MetaParameters::new(1, 10, 0.0, 0.1),
            MetaParameters::new(1, 10, f64::NAN, 0.1),
            MetaParameters::new(1, 10, 1.0, -0.1),
            MetaParameters::new(1, 10, 1.0, f64::INFINITY)
        ];
        for case in cases.into_iter() {
            match (case) {
                Result::Err(ApproximatorError::InvalidMetaParameter { .. }) => {},
                other => panic!("Expected invalid meta-parameter, got {:?}", other)
            }
        }
    }
}
