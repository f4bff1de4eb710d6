extern crate ndarray;

use ndarray::*;

pub fn all_finite<D : Dimension>(arr : ArrayView<f64, D>) -> bool {
    arr.iter().all(|x| x.is_finite())
}

pub fn usize_to_column(vec : &[usize]) -> Array2<f64> {
    let n = vec.len();
    let mut result = Array::zeros((n, 1));
    for i in 0..n {
        result[[i, 0]] = vec[i] as f64;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_non_finite() {
        let mut mat = Array2::<f64>::zeros((2, 2));
        assert!(all_finite(mat.view()));
        mat[[1, 0]] = f64::NAN;
        assert!(!all_finite(mat.view()));
        mat[[1, 0]] = f64::NEG_INFINITY;
        assert!(!all_finite(mat.view()));
    }

    #[test]
    fn counts_become_a_column() {
        let column = usize_to_column(&[3, 5]);
        assert_eq!(column, array![[3.0f64], [5.0f64]]);
    }
}
