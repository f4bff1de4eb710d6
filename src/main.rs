#![allow(unused_parens)]

extern crate ndarray;
extern crate pretty_env_logger;
#[macro_use] extern crate log;

use ndarray::*;
use rand::prelude::*;
use rand::rngs::StdRng;

use std::env;
use std::f64::consts::PI;
use std::path::PathBuf;
use std::process;

use random_feature_regression::error::*;
use random_feature_regression::function_approximator::*;
use random_feature_regression::matrix_store::*;
use random_feature_regression::meta_parameters::*;
use random_feature_regression::rrff_approximator::*;

const SEED : u64 = 0;
const NUM_TRAINING_POINTS : usize = 50;
const NUM_HELD_OUT_POINTS : usize = 10;
const NUM_GRID_SAMPLES : usize = 100;

fn f(x : f64) -> f64 {
    x.sin()
}

fn run(save_directory : Option<PathBuf>) -> Result<(), ApproximatorError> {
    let meta_parameters = MetaParameters::new(1, 20, 1.0, 0.000001)?;
    let mut approximator = RrffApproximator::new(meta_parameters);
    let mut rng = StdRng::seed_from_u64(SEED);

    let inputs = Array::linspace(0.0f64, 2.0f64 * PI, NUM_TRAINING_POINTS).insert_axis(Axis(1));
    let targets = inputs.mapv(f);

    info!("Training on {} samples of sin(x)", NUM_TRAINING_POINTS);
    approximator.train(inputs.view(), targets.view(), &mut rng)?;

    let held_out = Array::from_shape_fn((NUM_HELD_OUT_POINTS, 1), |_| rng.gen_range(0.0f64, 2.0f64 * PI));
    let expected = held_out.mapv(f);
    let outputs = approximator.predict(held_out.view())?;

    let diff = &outputs - &expected;
    let rmse = (diff.mapv(|x| x * x).sum() / (NUM_HELD_OUT_POINTS as f64)).sqrt();
    info!("Held-out RMSE: {}", rmse);

    let mut store = TextMatrixStore::new();
    let report = approximator.save_grid_data(array![0.0f64].view(), array![2.0f64 * PI].view(),
                                             &[NUM_GRID_SAMPLES], save_directory.as_deref(),
                                             &mut store, true)?;
    if (!report.is_success()) {
        warn!("Failed to save grid artifacts: {:?}", report.get_failures());
    }
    Result::Ok(())
}

fn main() {
    pretty_env_logger::init();

    let save_directory = env::args().nth(1).map(PathBuf::from);
    if let Result::Err(err) = run(save_directory) {
        error!("{}", err);
        process::exit(1);
    }
}
