extern crate ndarray;

use ndarray::*;
use serde::{Serialize, Deserialize};

use std::convert::TryFrom;

use crate::cosine_features::*;
use crate::error::*;

///The learned state of a random-feature regression model: the random cosine features
///(`periods`, B x D and `phases`, B) together with the `weights` (B x K) fitted on top of them.
///Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ModelParametersData")]
pub struct ModelParameters {
    weights : Array2<f64>,
    periods : Array2<f64>,
    phases : Array1<f64>
}

//Unchecked serialized form, only turned into ModelParameters through ModelParameters::new
#[derive(Deserialize)]
struct ModelParametersData {
    weights : Array2<f64>,
    periods : Array2<f64>,
    phases : Array1<f64>
}

impl TryFrom<ModelParametersData> for ModelParameters {
    type Error = ApproximatorError;

    fn try_from(data : ModelParametersData) -> Result<ModelParameters, ApproximatorError> {
        ModelParameters::new(data.weights, data.periods, data.phases)
    }
}

impl ModelParameters {
    ///Constructs [`ModelParameters`], checking that `weights`, `periods` and `phases`
    ///all agree on the number of basis functions.
    pub fn new(weights : Array2<f64>, periods : Array2<f64>,
               phases : Array1<f64>) -> Result<ModelParameters, ApproximatorError> {
        let num_basis_functions = periods.shape()[0];
        if (phases.shape()[0] != num_basis_functions) {
            return Result::Err(ApproximatorError::dimension_mismatch("phases", num_basis_functions,
                                                                      phases.shape()[0]));
        }
        if (weights.shape()[0] != num_basis_functions) {
            return Result::Err(ApproximatorError::dimension_mismatch("weight rows", num_basis_functions,
                                                                      weights.shape()[0]));
        }
        Result::Ok(ModelParameters {
            weights,
            periods,
            phases
        })
    }

    pub fn get_weights(&self) -> ArrayView2<f64> {
        self.weights.view()
    }
    pub fn get_periods(&self) -> ArrayView2<f64> {
        self.periods.view()
    }
    pub fn get_phases(&self) -> ArrayView1<f64> {
        self.phases.view()
    }

    pub fn get_number_of_basis_functions(&self) -> usize {
        self.periods.shape()[0]
    }
    pub fn get_expected_input_dim(&self) -> usize {
        self.periods.shape()[1]
    }
    pub fn get_output_dim(&self) -> usize {
        self.weights.shape()[1]
    }

    ///Activations of the cosine features of this model for each row of `inputs`.
    pub fn cosine_activations(&self, inputs : ArrayView2<f64>) -> Array2<f64> {
        cosine_activations(self.periods.view(), self.phases.view(), inputs)
    }

    ///Model outputs (N x K) for each row of `inputs`. Does not check the input width,
    ///callers go through the approximator for that.
    pub fn predict(&self, inputs : ArrayView2<f64>) -> Array2<f64> {
        let activations = self.cosine_activations(inputs);
        activations.dot(&self.weights)
    }
}
