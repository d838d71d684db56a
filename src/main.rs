// Thin driver around the library: trains an XNOR network and prints the
// result. Pass a NetworkSpec JSON path to change the shape or hyperparameters.
// Set RUST_LOG=debug to follow per-epoch progress.
use std::process::ExitCode;

use bpnn::{Network, NetworkSpec};

const MAX_EPOCHS: usize = 100_000;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> bpnn::Result<()> {
    let spec = match std::env::args().nth(1) {
        Some(path) => NetworkSpec::load_json(&path)?,
        None => NetworkSpec::new(2, 1, vec![3, 3], 0.6, 0.0001),
    };
    let mut network = Network::new(&spec, &mut rand::thread_rng())?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![1.0], vec![0.0], vec![0.0], vec![1.0]];

    let (min_error, epochs) = network.train(&inputs, &targets, MAX_EPOCHS)?;
    println!("min error {min_error:.8} after {epochs} epochs");

    for input in &inputs {
        println!("{:?} -> {:.4?}", input, network.predict(input)?);
    }
    println!("{}", network.to_json()?);
    Ok(())
}
