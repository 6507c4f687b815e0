use power_plan_toolbox::calculators::{
    format_quantity_set, solve, CalcError, ElectricalQuantitySet,
};
use power_plan_toolbox::quantity::PLACEHOLDER;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn voltage_and_current_give_resistance_and_power() {
    let set = ElectricalQuantitySet {
        voltage: Some(230.0),
        current: Some(10.0),
        ..Default::default()
    };
    let sol = solve(&set).expect("solve");
    assert!(close(sol.resistance, 23.0));
    assert!(close(sol.power, 2300.0));
    assert_eq!(
        sol.formatted(),
        [
            "230.0 V".to_string(),
            "10.0 A".to_string(),
            "23.0 Ω".to_string(),
            "2300.0 W".to_string()
        ]
    );
}

#[test]
fn resistance_and_power_give_voltage_and_current() {
    let set = ElectricalQuantitySet {
        resistance: Some(10.0),
        power: Some(1000.0),
        ..Default::default()
    };
    let sol = solve(&set).expect("solve");
    assert!(close(sol.current, 10.0));
    assert!(close(sol.voltage, 100.0));
}

#[test]
fn current_and_power_give_voltage() {
    let set = ElectricalQuantitySet {
        current: Some(4.0),
        power: Some(920.0),
        ..Default::default()
    };
    let sol = solve(&set).expect("solve");
    assert!(close(sol.voltage, 230.0));
    assert!(close(sol.resistance, 57.5));
}

#[test]
fn single_value_is_insufficient() {
    let set = ElectricalQuantitySet {
        voltage: Some(230.0),
        ..Default::default()
    };
    assert_eq!(
        solve(&set).unwrap_err(),
        CalcError::InsufficientInputs { provided: 1 }
    );
    assert_eq!(
        solve(&ElectricalQuantitySet::default()).unwrap_err(),
        CalcError::InsufficientInputs { provided: 0 }
    );
}

#[test]
fn voltage_current_pair_wins_over_other_inputs() {
    // R과 P가 함께 들어와도 (V, I) 쌍으로 풀고 나머지는 계산값으로 덮어쓴다.
    let set = ElectricalQuantitySet {
        voltage: Some(12.0),
        current: Some(2.0),
        resistance: Some(100.0),
        power: Some(1.0),
    };
    let sol = solve(&set).expect("solve");
    assert!(close(sol.resistance, 6.0));
    assert!(close(sol.power, 24.0));
}

#[test]
fn voltage_resistance_pair_wins_over_power() {
    let set = ElectricalQuantitySet {
        voltage: Some(10.0),
        resistance: Some(5.0),
        power: Some(999.0),
        ..Default::default()
    };
    let sol = solve(&set).expect("solve");
    assert!(close(sol.current, 2.0));
    assert!(close(sol.power, 20.0));
}

#[test]
fn text_inputs_trim_whitespace_and_skip_garbage() {
    let set = ElectricalQuantitySet::from_text(" 230 ", "abc", "", "2300");
    assert_eq!(set.voltage, Some(230.0));
    assert_eq!(set.current, None);
    assert_eq!(set.resistance, None);
    assert_eq!(set.known_count(), 2);
    let sol = solve(&set).expect("solve");
    assert!(close(sol.current, 10.0));
}

#[test]
fn results_round_to_three_places() {
    let set = ElectricalQuantitySet {
        voltage: Some(10.0),
        current: Some(3.0),
        ..Default::default()
    };
    let sol = solve(&set).expect("solve");
    assert_eq!(sol.formatted()[2], "3.333 Ω");
    assert!(close(sol.rounded(3).resistance, 3.333));
}

#[test]
fn unknown_values_show_placeholder() {
    let shown = format_quantity_set(&ElectricalQuantitySet {
        voltage: Some(1.5),
        ..Default::default()
    });
    assert_eq!(shown[0], "1.5 V");
    assert!(shown[1..].iter().all(|s| s == PLACEHOLDER));
}

#[test]
fn zero_current_is_not_rejected() {
    let set = ElectricalQuantitySet {
        voltage: Some(230.0),
        current: Some(0.0),
        ..Default::default()
    };
    let sol = solve(&set).expect("solve");
    assert!(sol.resistance.is_infinite());
    assert!(close(sol.power, 0.0));
    assert_eq!(sol.formatted()[2], "inf Ω");
}

#[test]
fn whole_numbers_keep_one_decimal() {
    let shown = format_quantity_set(&ElectricalQuantitySet {
        voltage: Some(12.0),
        current: Some(0.5),
        resistance: Some(-4.0),
        power: Some(6.0004),
    });
    assert_eq!(shown, ["12.0 V", "0.5 A", "-4.0 Ω", "6.0 W"]);
}
