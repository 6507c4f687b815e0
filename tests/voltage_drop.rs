use power_plan_toolbox::calculators::{
    estimate_voltage_drop, estimate_voltage_drop_from_text, CalcError, ConductorRun,
    DEFAULT_CONDUCTOR_AREA,
};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

#[test]
fn thirty_metre_run_on_two_and_half_square() {
    let est = estimate_voltage_drop(&ConductorRun {
        length_m: 30.0,
        load_current_a: 16.0,
        conductor_area_mm2: 2.5,
        supply_voltage_v: 230.0,
    });
    assert!(close(est.round_trip_length_m, 60.0, 1e-9));
    assert!(close(est.resistance_ohm, 0.42, 1e-9));
    assert!(close(est.drop_v, 6.72, 1e-9));
    assert!(close(est.percent_drop, 2.922, 1e-3));
}

#[test]
fn text_variant_reports_the_bad_field() {
    let err = estimate_voltage_drop_from_text("30", "16", "mains", DEFAULT_CONDUCTOR_AREA)
        .unwrap_err();
    assert_eq!(
        err,
        CalcError::InvalidNumericInput {
            field: "supply voltage"
        }
    );
    let err = estimate_voltage_drop_from_text("", "16", "230", 2.5).unwrap_err();
    assert_eq!(err, CalcError::InvalidNumericInput { field: "length" });
}

#[test]
fn larger_conductor_drops_less() {
    let run = |area| {
        estimate_voltage_drop(&ConductorRun {
            length_m: 50.0,
            load_current_a: 20.0,
            conductor_area_mm2: area,
            supply_voltage_v: 230.0,
        })
    };
    assert!(run(6.0).drop_v < run(2.5).drop_v);
}

#[test]
fn zero_supply_gives_infinite_percent() {
    let est = estimate_voltage_drop_from_text("10", "10", "0", 2.5).expect("drop");
    assert!(est.percent_drop.is_infinite());
}
