extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;

use crate::array_utils::*;
use crate::error::*;
use crate::linalg_utils::*;

///Solves the ridge regression problem `min_W |XW - Y|^2 + regularization * |W|^2` in closed form,
///where `X` is `features` (N x B), optionally extended by a column of ones when `use_offset`
///is set, and `Y` is `targets` (N x K). The result is the B x K weight matrix, with an extra
///last row holding the intercept when `use_offset` is set.
///
///With `regularization == 0` this is ordinary least squares, which fails explicitly
///on rank-deficient systems rather than returning non-finite weights.
pub fn least_squares(features : ArrayView2<f64>, targets : ArrayView2<f64>,
                     use_offset : bool, regularization : f64) -> Result<Array2<f64>, ApproximatorError> {
    let n = features.shape()[0];
    if (targets.shape()[0] != n) {
        return Result::Err(ApproximatorError::dimension_mismatch("target rows", n, targets.shape()[0]));
    }

    let design = if (use_offset) {
        append_ones_column(features)
    } else {
        features.to_owned()
    };
    let num_unknowns = design.shape()[1];
    let num_outputs = targets.shape()[1];

    if (regularization == 0.0f64 && n < num_unknowns) {
        error!("Unregularized least squares with {} samples for {} unknowns", n, num_unknowns);
        return Result::Err(ApproximatorError::SingularSystem(
            format!("{} samples cannot determine {} weights without regularization", n, num_unknowns)));
    }

    debug!("Solving {} x {} regularized normal equations for {} outputs", num_unknowns, num_unknowns, num_outputs);

    let mut gram = design.t().dot(&design);
    for i in 0..num_unknowns {
        gram[[i, i]] += regularization;
    }
    let rhs = design.t().dot(&targets);

    let factorized = match (gram.factorizec(UPLO::Lower)) {
        Result::Ok(factorized) => factorized,
        Result::Err(err) => {
            error!("Cholesky factorization of the normal equations failed: {:?}", err);
            return Result::Err(ApproximatorError::SingularSystem(format!("{:?}", err)));
        }
    };

    let mut weights = Array::zeros((num_unknowns, num_outputs));
    for k in 0..num_outputs {
        let column = factorized.solvec(&rhs.column(k))
                     .map_err(|err| ApproximatorError::SingularSystem(format!("{:?}", err)))?;
        weights.column_mut(k).assign(&column);
    }

    if (!all_finite(weights.view())) {
        error!("Least squares produced non-finite weights");
        return Result::Err(ApproximatorError::NonFiniteSolution);
    }
    Result::Ok(weights)
}

///Evaluates a linear model fitted by [`least_squares`] with the same `use_offset` setting.
pub fn linear_prediction(features : ArrayView2<f64>, weights : ArrayView2<f64>,
                         use_offset : bool) -> Array2<f64> {
    if (use_offset) {
        append_ones_column(features).dot(&weights)
    } else {
        features.dot(&weights)
    }
}
