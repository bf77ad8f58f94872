use telecom_engineering_toolbox::evaluate::{evaluate, format_result, EvalError};
use telecom_engineering_toolbox::formula::FormulaRegistry;
use telecom_engineering_toolbox::normalize::NormalizedInputs;
use telecom_engineering_toolbox::prefix::PrefixTable;
use telecom_engineering_toolbox::telecom::BOLTZMANN;

fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
    let diff = (actual - expected).abs();
    let scale = expected.abs().max(1e-300);
    assert!(
        diff / scale <= rel_tol,
        "actual={actual}, expected={expected}, rel_err={}",
        diff / scale
    );
}

fn setup() -> (FormulaRegistry, PrefixTable) {
    (FormulaRegistry::standard().unwrap(), PrefixTable::standard())
}

fn inputs(pairs: &[(&str, f64)]) -> NormalizedInputs {
    pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
}

#[test]
fn bandwidth_is_the_frequency_span() {
    let (registry, prefixes) = setup();
    let result = evaluate(
        &registry,
        &prefixes,
        "bandwidth",
        &inputs(&[("Fmax", 9e6), ("Fmin", 5e6)]),
    )
    .unwrap();
    assert_close(result.value, 4e6, 1e-12);
    assert_eq!(result.unit, "Hz");
}

#[test]
fn inverted_frequency_range_is_a_domain_error() {
    let (registry, prefixes) = setup();
    let err = evaluate(
        &registry,
        &prefixes,
        "bandwidth",
        &inputs(&[("Fmax", 5e6), ("Fmin", 9e6)]),
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::Domain(_)));
}

#[test]
fn shannon_capacity_reference_point() {
    let (registry, prefixes) = setup();
    // log2(1 + 1023) = 10, so C = 10 Mbit/s with B = 1 MHz.
    let result = evaluate(
        &registry,
        &prefixes,
        "shannon",
        &inputs(&[("B", 1e6), ("SNR", 1023.0)]),
    )
    .unwrap();
    assert_close(result.value, 1e7, 1e-9);
    assert_eq!(result.unit, "bits/s");
}

#[test]
fn shannon_rejects_nonpositive_bandwidth() {
    let (registry, prefixes) = setup();
    let err = evaluate(
        &registry,
        &prefixes,
        "shannon",
        &inputs(&[("B", 0.0), ("SNR", 10.0)]),
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::Domain(_)));
}

#[test]
fn noise_power_matches_ktb() {
    let (registry, prefixes) = setup();
    let result = evaluate(
        &registry,
        &prefixes,
        "noise_power",
        &inputs(&[("T", 290.0), ("B", 1000.0)]),
    )
    .unwrap();
    assert_close(result.value, BOLTZMANN * 290.0 * 1000.0, 1e-12);
    assert_close(result.value, 4.0039e-18, 1e-4);
    assert_eq!(result.unit, "W");
}

#[test]
fn noise_voltage_matches_sqrt_4krtb() {
    let (registry, prefixes) = setup();
    let result = evaluate(
        &registry,
        &prefixes,
        "noise_voltage",
        &inputs(&[("R", 50.0), ("T", 290.0), ("B", 1e6)]),
    )
    .unwrap();
    let expected = (4.0 * BOLTZMANN * 50.0 * 290.0 * 1e6).sqrt();
    assert_close(result.value, expected, 1e-12);
    assert_eq!(result.unit, "V");
}

#[test]
fn noise_factor_recovers_linear_ratio_from_decibels() {
    let (registry, prefixes) = setup();
    let result = evaluate(&registry, &prefixes, "noise_factor", &inputs(&[("NF", 3.0)]))
        .unwrap();
    assert_close(result.value, 10f64.powf(0.3), 1e-12);
    assert_eq!(result.unit, "adim");
}

#[test]
fn noise_figure_is_ten_log_of_the_factor() {
    let (registry, prefixes) = setup();
    let result = evaluate(&registry, &prefixes, "noise_figure", &inputs(&[("F", 2.0)]))
        .unwrap();
    assert_close(result.value, 3.0102999566398, 1e-10);
    assert_eq!(result.unit, "dB");
}

#[test]
fn noise_figure_rejects_nonpositive_factor() {
    let (registry, prefixes) = setup();
    let err = evaluate(&registry, &prefixes, "noise_figure", &inputs(&[("F", 0.0)]))
        .unwrap_err();
    assert!(matches!(err, EvalError::Domain(_)));
}

#[test]
fn factor_and_figure_are_inverses() {
    let (registry, prefixes) = setup();
    for nf_db in [0.0, 1.5, 3.0, 6.0, 10.0] {
        let factor = evaluate(
            &registry,
            &prefixes,
            "noise_factor",
            &inputs(&[("NF", nf_db)]),
        )
        .unwrap()
        .value;
        let back = evaluate(
            &registry,
            &prefixes,
            "noise_figure",
            &inputs(&[("F", factor)]),
        )
        .unwrap()
        .value;
        assert_close(back, nf_db, 1e-10);
    }
}

#[test]
fn unregistered_key_is_rejected() {
    let (registry, prefixes) = setup();
    let err = evaluate(&registry, &prefixes, "warp_drive", &NormalizedInputs::new())
        .unwrap_err();
    assert_eq!(err, EvalError::UnknownFormula("warp_drive".to_string()));
}

#[test]
fn missing_declared_field_names_formula_and_field() {
    let (registry, prefixes) = setup();
    let err = evaluate(&registry, &prefixes, "shannon", &inputs(&[("B", 1e6)]))
        .unwrap_err();
    assert_eq!(err, EvalError::MissingField { formula: "shannon", field: "SNR" });
}

#[test]
fn evaluation_is_bitwise_deterministic() {
    let (registry, prefixes) = setup();
    let args = inputs(&[("R", 75.0), ("T", 300.0), ("B", 2.5e6)]);
    let first = evaluate(&registry, &prefixes, "noise_voltage", &args).unwrap();
    let second = evaluate(&registry, &prefixes, "noise_voltage", &args).unwrap();
    assert_eq!(first.value.to_bits(), second.value.to_bits());
    assert_eq!(first.display, second.display);
}

#[test]
fn display_carries_three_forms() {
    let (registry, prefixes) = setup();
    let result = evaluate(
        &registry,
        &prefixes,
        "bandwidth",
        &inputs(&[("Fmax", 9e6), ("Fmin", 5e6)]),
    )
    .unwrap();
    let parts: Vec<&str> = result.display.split("   |   ").collect();
    assert_eq!(parts.len(), 3);
    assert!(parts[1].contains("MHz"), "prefixed form: {}", parts[1]);
    assert!(parts[2].contains("× 10^"), "scientific form: {}", parts[2]);
}

#[test]
fn zero_result_display_is_all_zeros() {
    let prefixes = PrefixTable::standard();
    let display = format_result(&prefixes, 0.0, "Hz");
    assert_eq!(display, "0 Hz   |   0 Hz   |   0 Hz");
}

#[test]
fn tiny_values_pick_a_submultiple_prefix() {
    let prefixes = PrefixTable::standard();
    let display = format_result(&prefixes, 4.0039e-18, "W");
    assert!(display.contains("aW"), "display: {display}");
}
