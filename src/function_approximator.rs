extern crate ndarray;

use ndarray::*;
use rand::RngCore;

use std::path::Path;

use crate::error::*;
use crate::grid_data::*;
use crate::matrix_store::*;
use crate::meta_parameters::*;
use crate::model_parameters::*;

///Common interface of the function approximators. Each implementation owns its own
///construction, including cloning through [`FunctionApproximator::clone_box`].
pub trait FunctionApproximator {
    ///Short identifier of the approximation method
    fn get_name(&self) -> &'static str;

    fn get_meta_parameters(&self) -> &MetaParameters;

    ///The model parameters, or `None` while untrained
    fn get_model_parameters(&self) -> Option<&ModelParameters>;

    fn get_expected_input_dim(&self) -> usize {
        self.get_meta_parameters().get_expected_input_dim()
    }

    fn is_trained(&self) -> bool {
        self.get_model_parameters().is_some()
    }

    ///Fits a model to `inputs` (N x D) and `targets` (N x K). Training an already
    ///trained approximator changes nothing and yields [`ApproximatorError::AlreadyTrained`].
    fn train(&mut self, inputs : ArrayView2<f64>, targets : ArrayView2<f64>,
             rng : &mut dyn RngCore) -> Result<(), ApproximatorError>;

    ///Fits a new model regardless of whether one exists. The old model is only
    ///replaced once the new one has been fitted successfully.
    fn retrain(&mut self, inputs : ArrayView2<f64>, targets : ArrayView2<f64>,
               rng : &mut dyn RngCore) -> Result<(), ApproximatorError>;

    ///Model outputs (N x K) for `inputs` (N x D). Yields [`ApproximatorError::NotTrained`]
    ///before training.
    fn predict(&self, inputs : ArrayView2<f64>) -> Result<Array2<f64>, ApproximatorError>;

    ///Writes grid diagnostics of the trained model, see [`save_grid_data`].
    fn save_grid_data(&self, min : ArrayView1<f64>, max : ArrayView1<f64>, n_samples_per_dim : &[usize],
                      destination : Option<&Path>, store : &mut dyn MatrixStore,
                      overwrite : bool) -> Result<GridDataReport, ApproximatorError>;

    fn clone_box(&self) -> Box<dyn FunctionApproximator>;
}

impl Clone for Box<dyn FunctionApproximator> {
    fn clone(&self) -> Box<dyn FunctionApproximator> {
        self.clone_box()
    }
}
