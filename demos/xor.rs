use step_nn::{accuracy, Instance, Network, NetworkSpec};

fn main() {
    tracing_subscriber::fmt::init();

    let instances = vec![
        Instance::with_class_index(vec![1.0, 0.0], 1, 2),
        Instance::with_class_index(vec![1.0, 1.0], 0, 2),
        Instance::with_class_index(vec![0.0, 1.0], 1, 2),
        Instance::with_class_index(vec![0.0, 0.0], 0, 2),
    ];

    let mut spec = NetworkSpec::new("xor", 4, 0.1, 200);
    spec.seed = Some(2024);
    spec.log_interval = Some(50);

    let mut network = match Network::from_spec(instances.clone(), &spec) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("failed to build network: {e}");
            return;
        }
    };
    network.train();

    for inst in &instances {
        println!("Input: {:?} -> class {}", inst.attributes, network.classify(inst));
    }
    println!("Accuracy: {:.2}", accuracy(&mut network, &instances));
}
