use super::*;

fn all_initializers() -> Vec<Arc<dyn Initializer>> {
    vec![
        Arc::new(ConstantFunction::new(-0.125)),
        Arc::new(ZeroFunction::new()),
        Arc::new(RandomFunction::new(-1.0, 1.0).unwrap().with_seed(8)),
        Arc::new(NormalFunction::new(0.0, 0.3).unwrap()),
        Arc::new(NguyenWidrowFunction::new().with_seed(21)),
    ]
}

#[test]
fn test_snapshot_capture() {
    let snapshot = InitializerSnapshot::capture(&ConstantFunction::new(3.14159)).unwrap();
    assert_eq!(snapshot.initializer_type, "Constant");
    assert_eq!(snapshot.record.get_f64("constant").unwrap(), 3.14159);
}

#[test]
fn test_snapshot_restore_every_strategy() {
    for initializer in all_initializers() {
        let snapshot = InitializerSnapshot::capture(initializer.as_ref()).unwrap();
        let restored = snapshot.restore().unwrap();
        assert_eq!(restored.initializer_type(), initializer.initializer_type());

        // Restored configuration writes the same record
        let again = InitializerSnapshot::capture(restored.as_ref()).unwrap();
        assert_eq!(again.record.len(), snapshot.record.len());
        for (key, value) in snapshot.record.iter() {
            assert_eq!(again.record.get(key), Some(value));
        }
    }
}

#[test]
fn test_snapshot_json_round_trip_every_strategy() {
    for initializer in all_initializers() {
        let snapshot = InitializerSnapshot::capture(initializer.as_ref()).unwrap();
        let json = snapshot.to_json_string().unwrap();
        let parsed = InitializerSnapshot::from_json_str(&json).unwrap();
        assert_eq!(parsed.initializer_type, snapshot.initializer_type);

        let restored = parsed.restore().unwrap();
        assert_eq!(restored.initializer_type(), initializer.initializer_type());
    }
}

#[test]
fn test_snapshot_restored_seeded_initializer_reproduces_values() {
    let original = RandomFunction::new(-0.5, 0.5).unwrap().with_seed(77);
    let json = InitializerSnapshot::capture(&original)
        .unwrap()
        .to_json_string()
        .unwrap();
    let restored = InitializerSnapshot::from_json_str(&json)
        .unwrap()
        .restore()
        .unwrap();

    let mut expected = build_kohonen(3, 2, 2);
    let mut actual = build_kohonen(3, 2, 2);
    original
        .initialize_kohonen_connector(Some(&mut expected))
        .unwrap();
    restored
        .initialize_kohonen_connector(Some(&mut actual))
        .unwrap();

    assert_eq!(kohonen_weights(&expected), kohonen_weights(&actual));
}

#[test]
fn test_snapshot_unknown_type() {
    let snapshot = InitializerSnapshot {
        initializer_type: String::from("Orthogonal"),
        record: InitializerRecord::new(),
    };
    assert!(matches!(
        snapshot.restore(),
        Err(ModelError::MalformedRecord(_))
    ));
}

#[test]
fn test_snapshot_missing_key() {
    let snapshot = InitializerSnapshot {
        initializer_type: String::from("Constant"),
        record: InitializerRecord::new(),
    };
    assert!(matches!(
        snapshot.restore(),
        Err(ModelError::MalformedRecord(_))
    ));
}

#[test]
fn test_snapshot_invalid_json() {
    assert!(matches!(
        InitializerSnapshot::from_json_str("{\"initializer_type\": 3}"),
        Err(IoError::JsonError(_))
    ));
}
