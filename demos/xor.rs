use slp::{Perceptron, TrainConfig};

// XOR is not linearly separable, so training runs until the iteration cap.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let desired = vec![1.0, 0.0, 1.0, 0.0];

    let mut perceptron = Perceptron::new(2, false)?;
    let report = perceptron.train_with(&inputs, &desired, &TrainConfig::default())?;

    println!(
        "iterations = {}, converged = {}, final mse = {:?}",
        report.iterations, report.converged, report.final_mse
    );
    for input in &inputs {
        println!("Input: {:?} -> Output: {}", input, perceptron.predict(input)?);
    }
    perceptron.print_weights()?;

    Ok(())
}
