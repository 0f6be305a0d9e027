//! Command-line driver: load a run configuration and datasets, build the
//! network, train it and report accuracy.

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use step_nn::data::load_instances_json;
use step_nn::{accuracy, Network, NetworkSpec};

#[derive(Parser)]
#[command(name = "step-nn")]
#[command(about = "Train a one-hidden-layer step-activation network", long_about = None)]
struct Cli {
    /// Run configuration (JSON `NetworkSpec`)
    #[arg(short, long)]
    config: String,

    /// Training instances (JSON array)
    #[arg(short, long)]
    train: String,

    /// Optional held-out instances evaluated after training
    #[arg(long)]
    test: Option<String>,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("step-nn: logging already initialised");
    }

    if let Err(e) = run(&cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> step_nn::Result<()> {
    let spec = NetworkSpec::load_json(&cli.config)?;
    let training_set = load_instances_json(&cli.train)?;
    info!(
        "Config '{}': hidden={}, lr={}, epochs={}, instances={}",
        spec.name, spec.hidden_nodes, spec.learning_rate, spec.max_epoch, training_set.len()
    );

    let mut network = Network::from_spec(training_set, &spec)?;
    let history = network.train_with_stats();
    if let Some(last) = history.last() {
        info!(
            "Final epoch error: {:.6}, in-pass accuracy: {:.2}%",
            last.train_error,
            last.accuracy(network.training_set().len()) * 100.0
        );
    }

    let training_set = network.training_set().to_vec();
    info!("Train accuracy: {:.2}%", accuracy(&mut network, &training_set) * 100.0);

    if let Some(path) = &cli.test {
        let test_set = load_instances_json(path)?;
        for (index, instance) in test_set.iter().enumerate() {
            if let Err(e) = network.try_classify(instance) {
                error!("test instance {index}: {e}");
                return Err(e);
            }
        }
        info!("Test accuracy: {:.2}%", accuracy(&mut network, &test_set) * 100.0);
    }

    Ok(())
}
