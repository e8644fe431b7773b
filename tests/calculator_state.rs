//! 상태 전이와 차량 목록 범위 테스트.
use ev_cost_calculator::{
    reference::{DEFAULT_PRICES, ELECTRIC_EXAMPLES},
    CalculatorState, EnergySource, FuelType, PriceTable,
};

#[test]
fn vehicle_list_is_bounded() {
    let mut state = CalculatorState::default();
    assert_eq!(state.vehicles.len(), 2);
    state = state.with_vehicle_added().with_vehicle_added();
    assert_eq!(state.vehicles.len(), 4);
    assert!(!state.can_add_vehicle());
    state = state.with_vehicle_added();
    assert_eq!(state.vehicles.len(), 4);

    state = state
        .with_vehicle_removed(0)
        .with_vehicle_removed(0)
        .with_vehicle_removed(0);
    assert_eq!(state.vehicles.len(), 1);
    assert!(!state.can_remove_vehicle());
    state = state.with_vehicle_removed(0);
    assert_eq!(state.vehicles.len(), 1);
    assert_eq!(state.vehicles.get(0).unwrap().name, "Car 4");
}

#[test]
fn remove_out_of_range_is_ignored() {
    let state = CalculatorState::default().with_vehicle_removed(5);
    assert_eq!(state.vehicles.len(), 2);
}

#[test]
fn invalid_price_keeps_default_not_zero() {
    let state = CalculatorState::default()
        .with_price_input(EnergySource::Gasoline, "2.10")
        .with_price_input(EnergySource::Gasoline, "abc")
        .with_price_input(EnergySource::Diesel, "0")
        .with_price_input(EnergySource::Electric, "");
    assert_eq!(state.prices, DEFAULT_PRICES);
}

#[test]
fn configured_defaults_are_the_fallback() {
    let defaults = PriceTable {
        electricity: 0.25,
        gasoline: 1.9,
        diesel: 1.8,
    };
    let state = CalculatorState::new(defaults).with_price_input(EnergySource::Electric, "x");
    assert_eq!(state.prices.electricity, 0.25);
    assert_eq!(state.defaults(), &defaults);
}

#[test]
fn consumption_edits_are_coerced() {
    let state = CalculatorState::default()
        .with_vehicle_consumption_input(0, "oops")
        .with_vehicle_consumption_input(1, "-2")
        .with_electric_input("not a number");
    assert_eq!(state.vehicles.get(0).unwrap().consumption, 0.0);
    assert_eq!(state.vehicles.get(1).unwrap().consumption, 0.0);
    assert_eq!(state.electric_consumption, 0.0);
    assert!(state.report().is_none());
}

#[test]
fn example_selection_sets_consumption() {
    let expected = [14.4, 16.8, 13.0, 15.8];
    for (i, value) in expected.iter().enumerate() {
        let state = CalculatorState::default().with_example(i);
        assert_eq!(state.electric_consumption, *value);
    }
    assert_eq!(ELECTRIC_EXAMPLES[3].model, "MG4");
    let state = CalculatorState::default().with_example(42);
    assert_eq!(state.electric_consumption, 0.0);
}

#[test]
fn fuel_code_edits_ignore_unknown_codes() {
    let state = CalculatorState::default()
        .with_vehicle_fuel_code(0, "diesel")
        .with_vehicle_fuel_code(1, "lpg");
    assert_eq!(state.vehicles.get(0).unwrap().fuel, FuelType::Diesel);
    assert_eq!(state.vehicles.get(1).unwrap().fuel, FuelType::Diesel);
}

#[test]
fn full_session_produces_report() {
    let state = CalculatorState::default()
        .with_example(0)
        .with_vehicle_name(0, "Golf")
        .with_vehicle_consumption_input(1, "0");
    let report = state.report().unwrap();
    assert_eq!(report.comparisons.len(), 1);
    let golf = &report.comparisons[0];
    assert_eq!(golf.name, "Golf");
    assert!((golf.savings_absolute - 8.04).abs() < 1e-9);
    assert!((golf.annual_savings - 1206.0).abs() < 1e-9);
    let eq = state.energy_equivalents();
    assert!((eq.gasoline - 1.6).abs() < 1e-12);
    assert!((eq.diesel - 1.44).abs() < 1e-12);
}
