use super::*;

#[test]
fn test_nguyen_widrow_factor() {
    assert_relative_eq!(nguyen_widrow_factor(1, 4), 2.8, epsilon = 1e-12);
    assert_relative_eq!(nguyen_widrow_factor(2, 9), 2.1, epsilon = 1e-12);
    assert_relative_eq!(nguyen_widrow_factor(4, 16), 1.4, epsilon = 1e-12);
    // Layers without inputs fall back to the bare scale
    assert_relative_eq!(nguyen_widrow_factor(0, 10), 0.7, epsilon = 1e-12);
    assert_relative_eq!(nguyen_widrow_factor(3, 0), 0.0);
}

#[test]
fn test_nguyen_widrow_backpropagation_row_norms() {
    let (_, _, mut connector) = build_backpropagation(5, 3);
    NguyenWidrowFunction::new()
        .with_seed(17)
        .initialize_backpropagation_connector(Some(&mut connector))
        .unwrap();

    let beta = nguyen_widrow_factor(5, 3);
    let weights = connector.weights();
    assert_eq!(weights.shape(), &[3, 5]);
    for row in weights.rows() {
        assert_relative_eq!(row.dot(&row).sqrt(), beta, epsilon = 1e-12);
    }
}

#[test]
fn test_nguyen_widrow_one_to_one_connector() {
    let source = ActivationLayer::new(4);
    let mut target = ActivationLayer::new(4);
    let mut connector =
        BackpropagationConnector::new(&source, &mut target, ConnectionMode::OneToOne).unwrap();

    NguyenWidrowFunction::new()
        .initialize_backpropagation_connector(Some(&mut connector))
        .unwrap();

    // Each target neuron has a single incoming synapse whose magnitude is beta
    let beta = nguyen_widrow_factor(4, 4);
    for weight in backpropagation_weights(&connector) {
        assert_relative_eq!(weight.abs(), beta, epsilon = 1e-12);
    }
}

#[test]
fn test_nguyen_widrow_kohonen_row_norms() {
    let mut connector = build_kohonen(3, 2, 4);
    NguyenWidrowFunction::new()
        .with_seed(5)
        .initialize_kohonen_connector(Some(&mut connector))
        .unwrap();

    let beta = nguyen_widrow_factor(3, 8);
    let weights = connector.weights();
    assert_eq!(weights.shape(), &[8, 3]);
    for row in weights.rows() {
        assert_relative_eq!(row.dot(&row).sqrt(), beta, epsilon = 1e-12);
    }
}

#[test]
fn test_nguyen_widrow_layer_biases_in_range() {
    let (_, mut hidden, _connector) = build_backpropagation(2, 9);
    assert_eq!(hidden.get_fan_in(), 2);

    NguyenWidrowFunction::new()
        .initialize_layer(Some(&mut hidden))
        .unwrap();

    let beta = nguyen_widrow_factor(2, 9);
    for bias in layer_biases(&hidden) {
        assert!(bias.abs() <= beta, "bias {} exceeds {}", bias, beta);
    }
}

#[test]
fn test_nguyen_widrow_input_layer_biases() {
    let mut input = ActivationLayer::new(6);
    NguyenWidrowFunction::new()
        .with_seed(3)
        .initialize_layer(Some(&mut input))
        .unwrap();
    for bias in layer_biases(&input) {
        assert!(bias.abs() <= 0.7);
    }
}

#[test]
fn test_nguyen_widrow_seeded_is_deterministic() {
    let initializer = NguyenWidrowFunction::new().with_seed(99);
    let mut first = build_kohonen(4, 3, 3);
    let mut second = build_kohonen(4, 3, 3);
    initializer
        .initialize_kohonen_connector(Some(&mut first))
        .unwrap();
    initializer
        .initialize_kohonen_connector(Some(&mut second))
        .unwrap();
    assert_eq!(kohonen_weights(&first), kohonen_weights(&second));
}

#[test]
fn test_nguyen_widrow_empty_connector() {
    let (_, _, mut connector) = build_backpropagation(0, 0);
    assert!(
        NguyenWidrowFunction::new()
            .initialize_backpropagation_connector(Some(&mut connector))
            .is_ok()
    );
}

#[test]
fn test_nguyen_widrow_rejects_absent_targets() {
    let initializer = NguyenWidrowFunction::new();
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
fn test_nguyen_widrow_record_round_trip() {
    let seeded = NguyenWidrowFunction::new().with_seed(123);
    let mut record = InitializerRecord::new();
    seeded.write_record(Some(&mut record)).unwrap();
    assert_eq!(
        NguyenWidrowFunction::read_record(Some(&record), &RecordContext).unwrap(),
        seeded
    );

    let mut empty = InitializerRecord::new();
    NguyenWidrowFunction::new()
        .write_record(Some(&mut empty))
        .unwrap();
    assert!(empty.is_empty());
    assert_eq!(
        NguyenWidrowFunction::read_record(Some(&empty), &RecordContext)
            .unwrap()
            .get_seed(),
        None
    );
}
