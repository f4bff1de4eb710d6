use thiserror::Error;

///Errors surfaced by training, prediction and grid evaluation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApproximatorError {
    ///A meta-parameter was outside of its admissible range.
    #[error("Invalid meta-parameter {name}: {message}")]
    InvalidMetaParameter {
        name : &'static str,
        message : String
    },

    ///The shape of some matrix did not agree with what the operation requires.
    #[error("Dimension mismatch for {what}: expected {expected}, actual {actual}")]
    DimensionMismatch {
        what : &'static str,
        expected : usize,
        actual : usize
    },

    ///The approximator has no model parameters yet. Call `train` first.
    #[error("Function approximator has not been trained yet")]
    NotTrained,

    ///The approximator already holds model parameters. Use `retrain` to fit a new model.
    #[error("Function approximator is already trained; call retrain to fit a new model")]
    AlreadyTrained,

    ///The regularized normal equations could not be solved.
    #[error("Singular least-squares system: {0}")]
    SingularSystem(String),

    ///The solver produced NaN or infinite weights.
    #[error("Least-squares solution contains non-finite values")]
    NonFiniteSolution,

    ///The requested sampling grid is malformed.
    #[error("Invalid grid: {0}")]
    InvalidGrid(String)
}

impl ApproximatorError {
    pub fn dimension_mismatch(what : &'static str, expected : usize, actual : usize) -> Self {
        ApproximatorError::DimensionMismatch { what, expected, actual }
    }

    pub fn invalid_meta_parameter(name : &'static str, message : impl Into<String>) -> Self {
        ApproximatorError::InvalidMetaParameter { name, message : message.into() }
    }

    ///True for the call-order mistakes (train twice, predict before train) which
    ///leave the approximator untouched, as opposed to genuine failures.
    pub fn is_usage_warning(&self) -> bool {
        match (self) {
            ApproximatorError::NotTrained | ApproximatorError::AlreadyTrained => true,
            _ => false
        }
    }
}
