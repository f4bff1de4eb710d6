extern crate ndarray;

use ndarray::*;

use std::ops::MulAssign;

///Scales the columns of `a` by the respective scaling factors in `b`. Useful
///for efficiently computing right-multiplication by a diagonal matrix.
pub fn scale_columns(a : ArrayView2<f64>, b : ArrayView1<f64>) -> Array2<f64> {
    let mut result = a.to_owned();
    let n = a.shape()[1];
    for i in 0..n {
        let scale = b[[i,]];
        let mut column = result.column_mut(i);
        column.mul_assign(scale);
    }
    result
}

///Appends a column of ones to `a`, for fitting an intercept term.
pub fn append_ones_column(a : ArrayView2<f64>) -> Array2<f64> {
    let n = a.shape()[0];
    let m = a.shape()[1];
    let mut result = Array::ones((n, m + 1));
    result.slice_mut(s![.., 0..m]).assign(&a);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn scale_columns_is_diagonal_right_multiply() {
        let a = random_matrix(5, 4);
        let b = random_vector(4);
        let diag = Array::from_diag(&b);

        let expected = a.dot(&diag);
        let actual = scale_columns(a.view(), b.view());
        assert_equal_matrices_to_within(&actual, &expected, 1e-12);
    }

    #[test]
    fn appended_column_is_ones() {
        let a = random_matrix(3, 2);
        let appended = append_ones_column(a.view());
        assert_eq!(appended.shape(), &[3, 3]);
        assert_equal_matrices_to_within(&appended.slice(s![.., 0..2]).to_owned(), &a, 0.0);
        for i in 0..3 {
            assert_eq!(appended[[i, 2]], 1.0f64);
        }
    }
}
