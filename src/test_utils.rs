extern crate ndarray;

use ndarray::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;

pub fn random_matrix(t : usize, s : usize) -> Array2<f64> {
    Array::random((t, s), StandardNormal)
}

pub fn random_vector(t : usize) -> Array1<f64> {
    Array::random((t,), StandardNormal)
}

pub fn mean_squared_error(one : &Array2<f64>, two : &Array2<f64>) -> f64 {
    let diff = one - two;
    let n = diff.len();
    if (n == 0) {
        return 0.0f64;
    }
    diff.mapv(|x| x * x).sum() / (n as f64)
}

pub fn assert_equal_matrices_to_within(one : &Array2<f64>, two : &Array2<f64>, within : f64) {
    if (one.shape() != two.shape()) {
        panic!("Shapes differ: {:?} vs {:?}", one.shape(), two.shape());
    }
    let diff = one - two;
    let max_abs_diff = diff.fold(0.0f64, |acc, x| acc.max(x.abs()));
    if (!(max_abs_diff <= within)) {
        println!("{} \n != \n {}", one, two);
        panic!("Matrices differ by {}, more than {}", max_abs_diff, within);
    }
}
