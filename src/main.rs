// Demonstration driver: fits the logical AND truth table and prints the
// learned outputs. An optional first argument names a JSON file with
// training hyperparameters (see `TrainConfig`).
use std::env;
use std::error::Error;

use log::info;
use slp::{Perceptron, TrainConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("slp=debug")).init();

    let config = match env::args().nth(1) {
        Some(path) => {
            info!("loading training config from {path}");
            TrainConfig::load_json(&path)?
        }
        None => TrainConfig::default(),
    };

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let desired = vec![0.0, 0.0, 0.0, 1.0];

    let mut perceptron = Perceptron::new(2, true)?;
    let report = perceptron.train_with(&inputs, &desired, &config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    for input in &inputs {
        println!("{:?} -> {}", input, perceptron.predict(input)?);
    }

    Ok(())
}
