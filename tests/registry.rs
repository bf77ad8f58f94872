use std::collections::HashSet;

use telecom_engineering_toolbox::formula::{FormulaId, FormulaRegistry};
use telecom_engineering_toolbox::prefix::PrefixTable;
use telecom_engineering_toolbox::session::RequestCounter;

#[test]
fn standard_catalog_passes_registration_checks() {
    let registry = FormulaRegistry::standard().unwrap();
    assert_eq!(registry.list().len(), 6);
}

#[test]
fn catalog_order_matches_the_id_order() {
    let registry = FormulaRegistry::standard().unwrap();
    let listed: Vec<FormulaId> = registry.list().iter().map(|f| f.id).collect();
    assert_eq!(listed, FormulaId::ALL.to_vec());
}

#[test]
fn lookup_by_id_and_key_agree() {
    let registry = FormulaRegistry::standard().unwrap();
    for id in FormulaId::ALL {
        let by_id = registry.get(id).unwrap();
        let by_key = registry.get_by_key(id.key()).unwrap();
        assert_eq!(by_id.id, by_key.id);
        assert_eq!(FormulaId::from_key(id.key()), Some(id));
    }
}

#[test]
fn unknown_key_finds_nothing() {
    let registry = FormulaRegistry::standard().unwrap();
    assert!(registry.get_by_key("warp_drive").is_none());
    assert!(FormulaId::from_key("warp_drive").is_none());
}

#[test]
fn field_names_are_unique_within_each_formula() {
    let registry = FormulaRegistry::standard().unwrap();
    for formula in registry.list() {
        let names: HashSet<&str> = formula.fields.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), formula.fields.len(), "formula={}", formula.id.key());
    }
}

#[test]
fn every_formula_declares_at_least_one_field() {
    let registry = FormulaRegistry::standard().unwrap();
    for formula in registry.list() {
        assert!(!formula.fields.is_empty(), "formula={}", formula.id.key());
    }
}

#[test]
fn prefix_table_has_exactly_one_unity_entry() {
    let table = PrefixTable::standard();
    let unity: Vec<_> = table.entries().iter().filter(|e| e.factor == 1.0).collect();
    assert_eq!(unity.len(), 1);
    assert_eq!(unity[0].symbol, "");
}

#[test]
fn prefix_symbols_are_unique() {
    let table = PrefixTable::standard();
    let symbols: HashSet<&str> = table.entries().iter().map(|e| e.symbol).collect();
    assert_eq!(symbols.len(), table.entries().len());
}

#[test]
fn non_unity_prefixes_descend_by_factor() {
    let table = PrefixTable::standard();
    let factors: Vec<f64> = table
        .entries()
        .iter()
        .filter(|e| e.factor != 1.0)
        .map(|e| e.factor)
        .collect();
    for window in factors.windows(2) {
        assert!(window[0] > window[1], "{} !> {}", window[0], window[1]);
    }
}

#[test]
fn kilo_lookup_and_conversion() {
    let table = PrefixTable::standard();
    assert_eq!(table.lookup("k").unwrap().factor, 1e3);
    assert_eq!(table.to_si(2.5, "M"), Some(2.5e6));
    assert_eq!(table.to_si(1.0, "X"), None);
}

#[test]
fn display_scaling_picks_the_largest_fitting_prefix() {
    let table = PrefixTable::standard();
    let (scaled, symbol) = table.scale_for_display(4e6).unwrap();
    assert_eq!(symbol, "M");
    assert!((scaled - 4.0).abs() < 1e-12);

    let (scaled, symbol) = table.scale_for_display(-3.2e-9).unwrap();
    assert_eq!(symbol, "n");
    assert!((scaled + 3.2).abs() < 1e-12);
}

#[test]
fn values_below_the_smallest_prefix_have_no_display_scale() {
    let table = PrefixTable::standard();
    assert!(table.scale_for_display(1e-27).is_none());
}

#[test]
fn stale_request_results_are_discarded() {
    let mut requests = RequestCounter::new();
    let first = requests.issue();
    let second = requests.issue();
    // The response for the superseded request must not surface.
    assert_eq!(requests.accept(first, "old"), None);
    assert_eq!(requests.accept(second, "new"), Some("new"));
    assert!(!requests.is_current(first));
    assert!(requests.is_current(second));
}

#[test]
fn each_issue_invalidates_all_earlier_tickets() {
    let mut requests = RequestCounter::new();
    let tickets: Vec<_> = (0..5).map(|_| requests.issue()).collect();
    for stale in &tickets[..4] {
        assert_eq!(requests.accept(*stale, ()), None);
    }
    assert_eq!(requests.accept(tickets[4], ()), Some(()));
}
