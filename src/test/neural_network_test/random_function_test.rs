use super::*;

#[test]
fn test_random_function_new() {
    let initializer = RandomFunction::new(-0.5, 0.5).unwrap();
    assert_eq!(initializer.get_min(), -0.5);
    assert_eq!(initializer.get_max(), 0.5);
    assert_eq!(initializer.get_seed(), None);
    assert_eq!(initializer.with_seed(3).get_seed(), Some(3));
}

#[test]
fn test_random_function_invalid_range() {
    assert!(matches!(
        RandomFunction::new(1.0, -1.0),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        RandomFunction::new(f64::NAN, 1.0),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        RandomFunction::new(0.0, f64::INFINITY),
        Err(ModelError::InputValidationError(_))
    ));
    // A degenerate range is allowed
    assert!(RandomFunction::new(2.0, 2.0).is_ok());
}

#[test]
fn test_random_function_range_width_overflow() {
    // Both bounds are finite but max - min overflows to infinity
    assert!(matches!(
        RandomFunction::new(-1e308, 1e308),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(matches!(
        RandomFunction::new(f64::MIN, f64::MAX),
        Err(ModelError::InputValidationError(_))
    ));
    assert!(RandomFunction::new(-1e307, 1e307).is_ok());

    let mut record = InitializerRecord::new();
    record.add_value("min", -1e308);
    record.add_value("max", 1e308);
    assert!(matches!(
        RandomFunction::read_record(Some(&record), &RecordContext),
        Err(ModelError::MalformedRecord(_))
    ));
}

#[test]
fn test_random_function_values_in_range() {
    let initializer = RandomFunction::new(-0.25, 0.75).unwrap();

    let mut layer = ActivationLayer::new(50);
    initializer.initialize_layer(Some(&mut layer)).unwrap();
    for bias in layer_biases(&layer) {
        assert!((-0.25..=0.75).contains(&bias), "bias out of range: {}", bias);
    }

    let (_, _, mut connector) = build_backpropagation(10, 10);
    initializer
        .initialize_backpropagation_connector(Some(&mut connector))
        .unwrap();
    for weight in backpropagation_weights(&connector) {
        assert!((-0.25..=0.75).contains(&weight));
    }

    let mut kohonen = build_kohonen(4, 5, 5);
    initializer
        .initialize_kohonen_connector(Some(&mut kohonen))
        .unwrap();
    for weight in kohonen_weights(&kohonen) {
        assert!((-0.25..=0.75).contains(&weight));
    }
}

#[test]
fn test_random_function_degenerate_range() {
    let initializer = RandomFunction::new(2.0, 2.0).unwrap();
    let mut layer = ActivationLayer::new(4);
    initializer.initialize_layer(Some(&mut layer)).unwrap();
    assert_eq!(layer_biases(&layer), vec![2.0; 4]);
}

#[test]
fn test_random_function_seeded_is_deterministic() {
    let initializer = RandomFunction::new(-1.0, 1.0).unwrap().with_seed(42);

    let (_, _, mut first) = build_backpropagation(6, 4);
    let (_, _, mut second) = build_backpropagation(6, 4);
    initializer
        .initialize_backpropagation_connector(Some(&mut first))
        .unwrap();
    initializer
        .initialize_backpropagation_connector(Some(&mut second))
        .unwrap();

    assert_eq!(
        backpropagation_weights(&first),
        backpropagation_weights(&second)
    );

    // Re-running on the same target produces the same values
    let before = backpropagation_weights(&first);
    initializer
        .initialize_backpropagation_connector(Some(&mut first))
        .unwrap();
    assert_eq!(backpropagation_weights(&first), before);
}

#[test]
fn test_random_function_values_vary() {
    let initializer = RandomFunction::new(-1.0, 1.0).unwrap().with_seed(1);
    let mut layer = ActivationLayer::new(20);
    initializer.initialize_layer(Some(&mut layer)).unwrap();

    let biases = layer_biases(&layer);
    assert!(biases.iter().any(|&b| b != biases[0]));
}

#[test]
fn test_random_function_rejects_absent_targets() {
    let initializer = RandomFunction::new(0.0, 1.0).unwrap();
    assert!(matches!(
        initializer.initialize_layer(None),
        Err(ModelError::InvalidArgument(_))
    ));
    assert!(matches!(
        initializer.initialize_backpropagation_connector(None),
        Err(ModelError::InvalidArgument(_))
    ));
    assert!(matches!(
        initializer.initialize_kohonen_connector(None),
        Err(ModelError::InvalidArgument(_))
    ));
}

#[test]
fn test_random_function_record_round_trip() {
    let initializer = RandomFunction::new(-0.3, 0.9).unwrap().with_seed(u64::MAX);
    let mut record = InitializerRecord::new();
    initializer.write_record(Some(&mut record)).unwrap();

    assert_eq!(record.len(), 3);
    let restored = RandomFunction::read_record(Some(&record), &RecordContext).unwrap();
    assert_eq!(restored, initializer);

    let unseeded = RandomFunction::new(0.0, 1.0).unwrap();
    let mut record = InitializerRecord::new();
    unseeded.write_record(Some(&mut record)).unwrap();
    assert!(!record.contains_key("seed"));
    assert_eq!(
        RandomFunction::read_record(Some(&record), &RecordContext).unwrap(),
        unseeded
    );
}

#[test]
fn test_random_function_malformed_record() {
    let mut record = InitializerRecord::new();
    record.add_value("min", 0.0);
    assert!(matches!(
        RandomFunction::read_record(Some(&record), &RecordContext),
        Err(ModelError::MalformedRecord(_))
    ));

    // Persisted range that cannot be sampled
    record.add_value("max", -1.0);
    assert!(matches!(
        RandomFunction::read_record(Some(&record), &RecordContext),
        Err(ModelError::MalformedRecord(_))
    ));

    record.add_value("max", 1.0);
    record.add_value("seed", -5i64);
    assert!(matches!(
        RandomFunction::read_record(Some(&record), &RecordContext),
        Err(ModelError::MalformedRecord(_))
    ));
}
