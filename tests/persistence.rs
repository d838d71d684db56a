use bpnn::{Error, Network, NetworkSpec};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn trained_network() -> Network {
    let mut rng = StdRng::seed_from_u64(17);
    let mut net = Network::create(2, 1, &[3, 3], 0.6, 0.0001, &mut rng).unwrap();
    let inputs = vec![vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
    let targets = vec![vec![1.0], vec![0.0], vec![0.0], vec![1.0]];
    net.train(&inputs, &targets, 500).unwrap();
    net
}

fn probes() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.37, -2.5],
        vec![1e-9, 123.456],
    ]
}

#[test]
fn decoded_network_predicts_identically() {
    let mut original = trained_network();
    let mut copy = Network::from_json(&original.to_json().unwrap()).unwrap();

    for probe in probes() {
        assert_eq!(original.predict(&probe).unwrap(), copy.predict(&probe).unwrap());
    }
}

#[test]
fn import_replaces_state_in_place() {
    let mut source = trained_network();
    let mut rng = StdRng::seed_from_u64(99);
    let mut target = Network::create(2, 1, &[3, 3], 0.1, 0.01, &mut rng).unwrap();

    target.import_json(&source.to_json().unwrap()).unwrap();

    assert_eq!(target, source);
    assert_eq!(target.predict(&[1.0, 0.0]).unwrap(), source.predict(&[1.0, 0.0]).unwrap());
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.json");
    let path = path.to_str().unwrap();

    let mut original = trained_network();
    original.save_json(path).unwrap();
    let mut loaded = Network::load_json(path).unwrap();

    assert_eq!(loaded, original);
    for probe in probes() {
        assert_eq!(original.predict(&probe).unwrap(), loaded.predict(&probe).unwrap());
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = Network::load_json(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn corrupt_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, r#"{"input": [], "hidden": "#).unwrap();
    let err = Network::load_json(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Format(_)));
}

#[test]
fn spec_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.json");
    let path = path.to_str().unwrap();
    let spec = NetworkSpec::new(3, 2, vec![4, 4], 0.25, 0.001);

    spec.save_json(path).unwrap();

    assert_eq!(NetworkSpec::load_json(path).unwrap(), spec);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(Network::new(&spec, &mut rng).unwrap().spec(), spec);
}

#[test]
fn invalid_spec_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.json");
    std::fs::write(
        &path,
        r#"{"input_count":2,"output_count":1,"hidden":[],"learning_rate":0.6,"convergence_threshold":0.0001}"#,
    )
    .unwrap();

    let err = NetworkSpec::load_json(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
