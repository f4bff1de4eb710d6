extern crate ndarray;

use ndarray::*;

///Projects every row of `inputs` (N x D) through the random cosine features given by
///`periods` (B x D) and `phases` (B), yielding the N x B activation matrix whose
///entry `(i, b)` is `cos(periods_b . inputs_i + phases_b)`.
///
///This is the single projection shared by training, prediction and grid evaluation.
///An input with no rows yields an empty 0 x B matrix.
pub fn cosine_activations(periods : ArrayView2<f64>, phases : ArrayView1<f64>,
                          inputs : ArrayView2<f64>) -> Array2<f64> {
    let num_basis_functions = periods.shape()[0];
    let n = inputs.shape()[0];
    if (n == 0) {
        return Array::zeros((0, num_basis_functions));
    }

    let mut activations = inputs.dot(&periods.t());
    activations += &phases;
    activations.mapv_inplace(f64::cos);
    activations
}
