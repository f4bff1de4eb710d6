extern crate ndarray;

use ndarray::*;

use std::path::Path;

use crate::array_utils::*;
use crate::error::*;
use crate::linalg_utils::*;
use crate::matrix_store::*;
use crate::model_parameters::*;
use crate::params::*;

pub const N_SAMPLES_PER_DIM_NAME : &str = "n_samples_per_dim";
pub const INPUTS_GRID_NAME : &str = "inputs_grid";
pub const ACTIVATIONS_GRID_NAME : &str = "activations_grid";
pub const ACTIVATIONS_WEIGHTED_GRID_NAME : &str = "activations_weighted_grid";
pub const PREDICTIONS_GRID_NAME : &str = "predictions_grid";

///Builds the full factorial grid spanning `[min, max]` with `n_samples_per_dim[d]` evenly
///spaced samples (endpoints included) along dimension `d`. Each row of the result is one
///grid point, and the last dimension varies fastest. A dimension sampled once sits at its `min`.
pub fn generate_inputs_grid(min : ArrayView1<f64>, max : ArrayView1<f64>,
                            n_samples_per_dim : &[usize]) -> Result<Array2<f64>, ApproximatorError> {
    let dims = min.shape()[0];
    if (max.shape()[0] != dims) {
        return Result::Err(ApproximatorError::dimension_mismatch("grid max", dims, max.shape()[0]));
    }
    if (n_samples_per_dim.len() != dims) {
        return Result::Err(ApproximatorError::dimension_mismatch("grid sample counts", dims,
                                                                  n_samples_per_dim.len()));
    }
    if (dims == 0) {
        return Result::Err(ApproximatorError::InvalidGrid(String::from("grid needs at least one dimension")));
    }
    if (n_samples_per_dim.iter().any(|n| *n == 0)) {
        return Result::Err(ApproximatorError::InvalidGrid(
                           format!("every dimension needs at least one sample, got {:?}", n_samples_per_dim)));
    }
    if (!all_finite(min) || !all_finite(max)) {
        return Result::Err(ApproximatorError::InvalidGrid(String::from("grid bounds must be finite")));
    }

    let total = n_samples_per_dim.iter()
                                 .try_fold(1usize, |acc, n| acc.checked_mul(*n))
                                 .ok_or_else(|| ApproximatorError::InvalidGrid(
                                     format!("grid with {:?} samples per dimension is too large", n_samples_per_dim)))?;
    if (total > MAX_GRID_POINTS) {
        return Result::Err(ApproximatorError::InvalidGrid(
                           format!("grid has {} points, at most {} are allowed", total, MAX_GRID_POINTS)));
    }

    let axes : Vec<Array1<f64>> = (0..dims).map(|d| {
        let n = n_samples_per_dim[d];
        if (n == 1) {
            Array::from(vec![min[[d,]]])
        } else {
            Array::linspace(min[[d,]], max[[d,]], n)
        }
    }).collect();

    let mut result = Array::zeros((total, dims));
    for i in 0..total {
        //Decompose the row index into per-dimension indices, last dimension fastest
        let mut remainder = i;
        for d in (0..dims).rev() {
            let n = n_samples_per_dim[d];
            result[[i, d]] = axes[d][[remainder % n,]];
            remainder /= n;
        }
    }
    Result::Ok(result)
}

///Diagnostic surfaces of a single-output model over a regular grid of inputs.
#[derive(Clone, Debug)]
pub struct GridData {
    pub n_samples_per_dim : Vec<usize>,
    ///G x D grid points
    pub inputs_grid : Array2<f64>,
    ///G x B raw cosine activations
    pub activations_grid : Array2<f64>,
    ///G x B activations with column b scaled by weight b
    pub activations_weighted_grid : Array2<f64>,
    ///G x 1 sums over the weighted activations, which are the model predictions
    pub predictions_grid : Array2<f64>
}

impl GridData {
    ///Evaluates `model` over the grid given by [`generate_inputs_grid`].
    pub fn evaluate(model : &ModelParameters, min : ArrayView1<f64>, max : ArrayView1<f64>,
                    n_samples_per_dim : &[usize]) -> Result<GridData, ApproximatorError> {
        if (model.get_output_dim() != 1) {
            return Result::Err(ApproximatorError::InvalidGrid(
                format!("grid diagnostics need a single-output model, this one has {} outputs",
                        model.get_output_dim())));
        }
        if (min.shape()[0] != model.get_expected_input_dim()) {
            return Result::Err(ApproximatorError::dimension_mismatch("grid min", model.get_expected_input_dim(),
                                                                      min.shape()[0]));
        }

        let inputs_grid = generate_inputs_grid(min, max, n_samples_per_dim)?;
        let activations_grid = model.cosine_activations(inputs_grid.view());

        let weights = model.get_weights();
        let activations_weighted_grid = scale_columns(activations_grid.view(), weights.column(0));

        let predictions_grid = activations_weighted_grid.sum_axis(Axis(1)).insert_axis(Axis(1));

        Result::Ok(GridData {
            n_samples_per_dim : n_samples_per_dim.to_vec(),
            inputs_grid,
            activations_grid,
            activations_weighted_grid,
            predictions_grid
        })
    }

    ///The named matrices in the order they are persisted.
    pub fn get_artifacts(&self) -> Vec<(&'static str, Array2<f64>)> {
        vec![
            (N_SAMPLES_PER_DIM_NAME, usize_to_column(&self.n_samples_per_dim)),
            (INPUTS_GRID_NAME, self.inputs_grid.clone()),
            (ACTIVATIONS_GRID_NAME, self.activations_grid.clone()),
            (ACTIVATIONS_WEIGHTED_GRID_NAME, self.activations_weighted_grid.clone()),
            (PREDICTIONS_GRID_NAME, self.predictions_grid.clone())
        ]
    }

    ///Hands every artifact to `store`. A failing artifact is logged and recorded
    ///in the report, but does not prevent the remaining ones from being saved.
    pub fn save(&self, store : &mut dyn MatrixStore, destination : &Path, overwrite : bool) -> GridDataReport {
        let mut outcomes = Vec::new();
        for (name, matrix) in self.get_artifacts().into_iter() {
            let outcome = store.save_matrix(destination, name, matrix.view(), overwrite);
            if let Result::Err(err) = &outcome {
                warn!("Could not save {} to {}: {}", name, destination.display(), err);
            }
            outcomes.push((name, outcome));
        }
        GridDataReport { outcomes }
    }
}

///Per-artifact outcome of saving grid diagnostics.
#[derive(Debug, Default)]
pub struct GridDataReport {
    pub outcomes : Vec<(&'static str, Result<(), StoreError>)>
}

impl GridDataReport {
    ///An empty report, used when there was nowhere to save to.
    pub fn skipped() -> GridDataReport {
        GridDataReport::default()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|(_, outcome)| outcome.is_ok())
    }

    pub fn get_failures(&self) -> Vec<&'static str> {
        self.outcomes.iter()
                     .filter(|(_, outcome)| outcome.is_err())
                     .map(|(name, _)| *name)
                     .collect()
    }
}

///Evaluates `model` over a grid and saves the diagnostics to `destination`. Without a
///destination nothing is computed and an empty, successful report is returned.
pub fn save_grid_data(model : &ModelParameters, min : ArrayView1<f64>, max : ArrayView1<f64>,
                      n_samples_per_dim : &[usize], destination : Option<&Path>,
                      store : &mut dyn MatrixStore, overwrite : bool) -> Result<GridDataReport, ApproximatorError> {
    let destination = match (destination) {
        Option::None => return Result::Ok(GridDataReport::skipped()),
        Option::Some(destination) => destination
    };

    let grid_data = GridData::evaluate(model, min, max, n_samples_per_dim)?;
    Result::Ok(grid_data.save(store, destination, overwrite))
}
