use telecom_engineering_toolbox::formula::FormulaRegistry;
use telecom_engineering_toolbox::normalize::{normalize, normalize_inputs, NormalizeError};
use telecom_engineering_toolbox::prefix::PrefixTable;

fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    let scale = expected.abs().max(1e-300);
    assert!(
        diff / scale <= rel_tol,
        "actual={actual}, expected={expected}, rel_err={}",
        diff / scale
    );
}

#[test]
fn plain_number_with_kilo_prefix() {
    let table = PrefixTable::standard();
    let v = normalize(&table, "B", "3", "k").unwrap();
    assert_close(v, 3000.0, 1e-12);
}

#[test]
fn empty_prefix_is_identity() {
    let table = PrefixTable::standard();
    let v = normalize(&table, "T", "290", "").unwrap();
    assert_close(v, 290.0, 1e-12);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let table = PrefixTable::standard();
    let v = normalize(&table, "R", "  42  ", "").unwrap();
    assert_close(v, 42.0, 1e-12);
}

#[test]
fn scientific_notation_is_accepted() {
    let table = PrefixTable::standard();
    let v = normalize(&table, "B", "1.5e3", "M").unwrap();
    assert_close(v, 1.5e9, 1e-12);
}

#[test]
fn micro_prefix_scales_down() {
    let table = PrefixTable::standard();
    let v = normalize(&table, "B", "7", "µ").unwrap();
    assert_close(v, 7e-6, 1e-12);
}

#[test]
fn normalization_is_linear_in_the_factor() {
    let table = PrefixTable::standard();
    for entry in table.entries() {
        let v = normalize(&table, "x", "2.5", entry.symbol).unwrap();
        assert_close(v, 2.5 * entry.factor, 1e-12);
    }
}

#[test]
fn blank_value_is_rejected() {
    let table = PrefixTable::standard();
    let err = normalize(&table, "Fmax", "   ", "").unwrap_err();
    assert_eq!(err, NormalizeError::EmptyValue { field: "Fmax".to_string() });
}

#[test]
fn garbage_text_is_rejected() {
    let table = PrefixTable::standard();
    let err = normalize(&table, "SNR", "abc", "").unwrap_err();
    assert_eq!(
        err,
        NormalizeError::InvalidNumber { field: "SNR".to_string(), raw: "abc".to_string() }
    );
}

#[test]
fn nan_and_infinity_literals_are_rejected() {
    let table = PrefixTable::standard();
    for raw in ["NaN", "inf", "-inf", "infinity"] {
        let err = normalize(&table, "B", raw, "").unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidNumber { .. }), "raw={raw}");
    }
}

#[test]
fn overflowing_literal_is_rejected() {
    let table = PrefixTable::standard();
    let err = normalize(&table, "B", "1e999", "").unwrap_err();
    assert!(matches!(err, NormalizeError::InvalidNumber { .. }));
}

#[test]
fn unknown_prefix_symbol_is_rejected() {
    let table = PrefixTable::standard();
    let err = normalize(&table, "B", "1", "X").unwrap_err();
    assert_eq!(
        err,
        NormalizeError::UnknownPrefix { field: "B".to_string(), symbol: "X".to_string() }
    );
}

#[test]
fn inputs_follow_declared_field_order() {
    let table = PrefixTable::standard();
    let registry = FormulaRegistry::standard().unwrap();
    let formula = registry.get_by_key("noise_voltage").unwrap();
    let pairs = vec![
        ("50".to_string(), String::new()),
        ("290".to_string(), String::new()),
        ("1".to_string(), "M".to_string()),
    ];
    let inputs = normalize_inputs(&table, formula, &pairs).unwrap();
    assert_close(inputs["R"], 50.0, 1e-12);
    assert_close(inputs["T"], 290.0, 1e-12);
    assert_close(inputs["B"], 1e6, 1e-12);
}

#[test]
fn missing_pair_surfaces_as_empty_value_for_that_field() {
    let table = PrefixTable::standard();
    let registry = FormulaRegistry::standard().unwrap();
    let formula = registry.get_by_key("bandwidth").unwrap();
    let pairs = vec![("9".to_string(), "M".to_string())];
    let err = normalize_inputs(&table, formula, &pairs).unwrap_err();
    assert_eq!(err, NormalizeError::EmptyValue { field: "Fmin".to_string() });
}

#[test]
fn first_invalid_field_wins() {
    let table = PrefixTable::standard();
    let registry = FormulaRegistry::standard().unwrap();
    let formula = registry.get_by_key("shannon").unwrap();
    let pairs = vec![
        ("oops".to_string(), String::new()),
        (String::new(), String::new()),
    ];
    let err = normalize_inputs(&table, formula, &pairs).unwrap_err();
    assert!(matches!(err, NormalizeError::InvalidNumber { ref field, .. } if field == "B"));
}
