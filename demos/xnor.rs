use std::sync::mpsc;
use std::thread;

use bpnn::{train_loop, EpochStats, Network, NetworkSpec, TrainConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> bpnn::Result<()> {
    env_logger::init();

    let spec = NetworkSpec::new(2, 1, vec![3, 3], 0.6, 0.0001);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut network = Network::new(&spec, &mut rng)?;

    let inputs = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![vec![1.0], vec![0.0], vec![0.0], vec![1.0]];

    let (tx, rx) = mpsc::channel::<EpochStats>();
    let printer = thread::spawn(move || {
        for stats in rx {
            if stats.epoch % 1000 == 0 {
                println!("Epoch {}: min error = {:.6}", stats.epoch, stats.min_error);
            }
        }
    });

    let config = TrainConfig::new(100_000).with_progress(tx);
    let report = train_loop(&mut network, &inputs, &targets, &config)?;
    drop(config);
    if printer.join().is_err() {
        log::error!("progress printer thread panicked");
    }

    println!(
        "Stopped after {} epochs (converged: {}), min error {:.8}",
        report.epochs, report.converged, report.min_error
    );
    for input in &inputs {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(input)?[0]);
    }
    Ok(())
}
