extern crate ndarray;

use ndarray::*;
use rand::RngCore;

use std::path::Path;

use crate::cosine_features::*;
use crate::error::*;
use crate::function_approximator::*;
use crate::grid_data::*;
use crate::least_squares::*;
use crate::matrix_store::*;
use crate::meta_parameters::*;
use crate::model_parameters::*;
use crate::params::*;
use crate::rand_utils::*;

///Whether an approximator holds a model. Being trained and having model
///parameters are the same thing.
#[derive(Clone, Debug, PartialEq)]
pub enum ApproximatorState {
    Untrained,
    Trained(ModelParameters)
}

///Regularized regression on random Fourier (cosine) features.
///
///Training draws `number_of_basis_functions` random cosine features, whose periods
///are normal with variance `2 * gamma` and whose phases are uniform on `[0, 2pi)`,
///projects the inputs through them and fits the output weights by ridge regression.
///Prediction projects new inputs through the same features and applies the weights.
#[derive(Clone, Debug)]
pub struct RrffApproximator {
    meta_parameters : MetaParameters,
    state : ApproximatorState
}

impl RrffApproximator {
    pub fn new(meta_parameters : MetaParameters) -> RrffApproximator {
        RrffApproximator {
            meta_parameters,
            state : ApproximatorState::Untrained
        }
    }

    ///Constructs an already-trained approximator from existing model parameters,
    ///which must agree with `meta_parameters` on the input dimension and number of
    ///basis functions.
    pub fn from_model_parameters(meta_parameters : MetaParameters,
                                 model_parameters : ModelParameters) -> Result<RrffApproximator, ApproximatorError> {
        if (model_parameters.get_expected_input_dim() != meta_parameters.get_expected_input_dim()) {
            return Result::Err(ApproximatorError::dimension_mismatch("model input dimension",
                                   meta_parameters.get_expected_input_dim(),
                                   model_parameters.get_expected_input_dim()));
        }
        if (model_parameters.get_number_of_basis_functions() != meta_parameters.get_number_of_basis_functions()) {
            return Result::Err(ApproximatorError::dimension_mismatch("model basis functions",
                                   meta_parameters.get_number_of_basis_functions(),
                                   model_parameters.get_number_of_basis_functions()));
        }
        Result::Ok(RrffApproximator {
            meta_parameters,
            state : ApproximatorState::Trained(model_parameters)
        })
    }

    pub fn get_state(&self) -> &ApproximatorState {
        &self.state
    }

    ///Discards the model, if any.
    pub fn reset(&mut self) {
        self.state = ApproximatorState::Untrained;
    }

    fn check_input_dim(&self, inputs : ArrayView2<f64>) -> Result<(), ApproximatorError> {
        let expected = self.meta_parameters.get_expected_input_dim();
        if (inputs.shape()[1] != expected) {
            return Result::Err(ApproximatorError::dimension_mismatch("input columns", expected, inputs.shape()[1]));
        }
        Result::Ok(())
    }

    fn get_trained_model(&self, operation : &str) -> Result<&ModelParameters, ApproximatorError> {
        match (&self.state) {
            ApproximatorState::Trained(model) => Result::Ok(model),
            ApproximatorState::Untrained => {
                warn!("{} called on an untrained {} approximator. Doing nothing.", operation, APPROXIMATOR_NAME);
                Result::Err(ApproximatorError::NotTrained)
            }
        }
    }

    ///Draws fresh random features and fits weights on them. Touches no state,
    ///so a failure leaves the approximator as it was.
    fn fit(&self, inputs : ArrayView2<f64>, targets : ArrayView2<f64>,
           rng : &mut dyn RngCore) -> Result<ModelParameters, ApproximatorError> {
        if (inputs.shape()[0] != targets.shape()[0]) {
            return Result::Err(ApproximatorError::dimension_mismatch("target rows", inputs.shape()[0],
                                                                      targets.shape()[0]));
        }
        self.check_input_dim(inputs)?;

        let num_basis_functions = self.meta_parameters.get_number_of_basis_functions();
        let gamma = self.meta_parameters.get_gamma();
        let regularization = self.meta_parameters.get_regularization();

        let (periods, phases) = generate_random_features(rng, num_basis_functions, inputs.shape()[1], gamma)?;
        let activations = cosine_activations(periods.view(), phases.view(), inputs);
        let weights = least_squares(activations.view(), targets, USE_OFFSET, regularization)?;

        info!("Trained {} approximator with {} basis functions on {} samples",
              APPROXIMATOR_NAME, num_basis_functions, inputs.shape()[0]);

        ModelParameters::new(weights, periods, phases)
    }
}

impl FunctionApproximator for RrffApproximator {
    fn get_name(&self) -> &'static str {
        APPROXIMATOR_NAME
    }

    fn get_meta_parameters(&self) -> &MetaParameters {
        &self.meta_parameters
    }

    fn get_model_parameters(&self) -> Option<&ModelParameters> {
        match (&self.state) {
            ApproximatorState::Trained(model) => Option::Some(model),
            ApproximatorState::Untrained => Option::None
        }
    }

    fn train(&mut self, inputs : ArrayView2<f64>, targets : ArrayView2<f64>,
             rng : &mut dyn RngCore) -> Result<(), ApproximatorError> {
        if (self.is_trained()) {
            warn!("You may not call train on a trained {} approximator more than once. Doing nothing.", APPROXIMATOR_NAME);
            warn!("   (if you really want to retrain, call retrain instead)");
            return Result::Err(ApproximatorError::AlreadyTrained);
        }
        let model = self.fit(inputs, targets, rng)?;
        self.state = ApproximatorState::Trained(model);
        Result::Ok(())
    }

    fn retrain(&mut self, inputs : ArrayView2<f64>, targets : ArrayView2<f64>,
               rng : &mut dyn RngCore) -> Result<(), ApproximatorError> {
        let model = self.fit(inputs, targets, rng)?;
        self.state = ApproximatorState::Trained(model);
        Result::Ok(())
    }

    fn predict(&self, inputs : ArrayView2<f64>) -> Result<Array2<f64>, ApproximatorError> {
        let model = self.get_trained_model("predict")?;
        self.check_input_dim(inputs)?;
        Result::Ok(model.predict(inputs))
    }

    fn save_grid_data(&self, min : ArrayView1<f64>, max : ArrayView1<f64>, n_samples_per_dim : &[usize],
                      destination : Option<&Path>, store : &mut dyn MatrixStore,
                      overwrite : bool) -> Result<GridDataReport, ApproximatorError> {
        if (destination.is_none()) {
            return Result::Ok(GridDataReport::skipped());
        }
        let model = self.get_trained_model("save_grid_data")?;
        save_grid_data(model, min, max, n_samples_per_dim, destination, store, overwrite)
    }

    fn clone_box(&self) -> Box<dyn FunctionApproximator> {
        Box::new(self.clone())
    }
}
