extern crate ndarray;

use ndarray::*;

use rand::prelude::*;
use rand::distributions::Uniform;
use rand_distr::Normal;
use std::f64::consts::PI;

use crate::error::*;

///Draws a `num_basis_functions x in_dimensions` matrix of cosine periods, each entry
///independently normal with mean zero and standard deviation `sqrt(2 * gamma)`.
pub fn generate_periods<R : Rng + ?Sized>(rng : &mut R, num_basis_functions : usize,
                                          in_dimensions : usize, gamma : f64)
                                         -> Result<Array2<f64>, ApproximatorError> {
    let std_dev = (2.0f64 * gamma).sqrt();
    let normal = Normal::new(0.0f64, std_dev)
                 .map_err(|_| ApproximatorError::invalid_meta_parameter("gamma",
                              format!("cannot sample periods with standard deviation {}", std_dev)))?;

    let periods = Array::from_shape_fn((num_basis_functions, in_dimensions), |_| rng.sample(&normal));
    Result::Ok(periods)
}

///Draws `num_basis_functions` cosine phases uniformly from `[0, 2pi)`.
pub fn generate_phases<R : Rng + ?Sized>(rng : &mut R, num_basis_functions : usize) -> Array1<f64> {
    let two_pi = Uniform::new(0.0f64, 2.0f64 * PI);
    let as_vec : Vec<f64> = (0..num_basis_functions).map(|_| rng.sample(&two_pi)).collect();
    Array::from(as_vec)
}

///Draws the periods followed by the phases of a fresh set of random cosine features.
///The order of the draws is fixed, so a seeded generator always reproduces the same features.
pub fn generate_random_features<R : Rng + ?Sized>(rng : &mut R, num_basis_functions : usize,
                                                  in_dimensions : usize, gamma : f64)
                                                 -> Result<(Array2<f64>, Array1<f64>), ApproximatorError> {
    let periods = generate_periods(rng, num_basis_functions, in_dimensions, gamma)?;
    let phases = generate_phases(rng, num_basis_functions);
    Result::Ok((periods, phases))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use approx::assert_abs_diff_eq;

    #[test]
    fn shapes_follow_request() {
        let mut rng = StdRng::seed_from_u64(7);
        let (periods, phases) = generate_random_features(&mut rng, 12, 3, 0.5).unwrap();
        assert_eq!(periods.shape(), &[12, 3]);
        assert_eq!(phases.shape(), &[12]);
    }

    #[test]
    fn phases_lie_in_zero_to_two_pi() {
        let mut rng = StdRng::seed_from_u64(11);
        let phases = generate_phases(&mut rng, 1000);
        for phase in phases.iter() {
            assert!(*phase >= 0.0f64 && *phase < 2.0f64 * PI);
        }
    }

    #[test]
    fn period_spread_matches_gamma() {
        let mut rng = StdRng::seed_from_u64(3);
        let gamma = 2.0f64;
        let periods = generate_periods(&mut rng, 20000, 1, gamma).unwrap();
        let n = periods.len() as f64;
        let mean = periods.sum() / n;
        let variance = periods.mapv(|x| (x - mean) * (x - mean)).sum() / n;

        assert_abs_diff_eq!(mean, 0.0f64, epsilon = 0.1f64);
        assert_abs_diff_eq!(variance, 2.0f64 * gamma, epsilon = 0.2f64);
    }

    #[test]
    fn same_seed_same_features() {
        let mut rng_one = StdRng::seed_from_u64(42);
        let mut rng_two = StdRng::seed_from_u64(42);
        let one = generate_random_features(&mut rng_one, 5, 2, 1.0).unwrap();
        let two = generate_random_features(&mut rng_two, 5, 2, 1.0).unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn different_seeds_differ() {
        let mut rng_one = StdRng::seed_from_u64(1);
        let mut rng_two = StdRng::seed_from_u64(2);
        let (periods_one, _) = generate_random_features(&mut rng_one, 5, 2, 1.0).unwrap();
        let (periods_two, _) = generate_random_features(&mut rng_two, 5, 2, 1.0).unwrap();
        assert_ne!(periods_one, periods_two);
    }
}
