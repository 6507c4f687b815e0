use power_plan_toolbox::calculators::{
    clamp_power_factor, compute_watts, compute_watts_from_text, estimate_power,
    estimate_power_from_text, recommended_breaker, CalcError, Phase, PhaseConfig,
    DEFAULT_POWER_FACTOR,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn single_phase_estimate() {
    let est = estimate_power(&PhaseConfig {
        phase: Phase::Single,
        voltage: 230.0,
        current: 16.0,
        power_factor: DEFAULT_POWER_FACTOR,
    });
    assert!(close(est.multiplier, 1.0));
    assert!(close(est.apparent_power_va, 3680.0));
    assert!(close(est.real_power_w, 3496.0));
    assert!(close(est.kilowatts, 3.496));
    assert!(close(est.recommended_breaker_a, 20.0));
}

#[test]
fn three_phase_uses_root_three() {
    let est = estimate_power(&PhaseConfig {
        phase: Phase::Three,
        voltage: 400.0,
        current: 10.0,
        power_factor: 1.0,
    });
    let expected = 3_f64.sqrt() * 4000.0;
    assert!(close(est.apparent_power_va, expected));
    assert!(close(est.real_power_w, expected));
}

#[test]
fn apparent_power_never_below_real_power() {
    for pf in [0.5, 0.8, 0.95, 1.0] {
        let est = estimate_power(&PhaseConfig {
            phase: Phase::Three,
            voltage: 400.0,
            current: 32.0,
            power_factor: pf,
        });
        assert!(est.apparent_power_va >= est.real_power_w);
    }
}

#[test]
fn breaker_is_rounded_to_two_places() {
    assert!(close(recommended_breaker(16.0), 20.0));
    assert!(close(recommended_breaker(10.123), 12.65));
}

#[test]
fn unparseable_current_is_rejected() {
    let err = estimate_power_from_text("230", "ten", Phase::Single, 0.95).unwrap_err();
    assert_eq!(err, CalcError::InvalidNumericInput { field: "current" });
    let err = compute_watts_from_text("", "5", 1.0).unwrap_err();
    assert_eq!(err, CalcError::InvalidNumericInput { field: "voltage" });
}

#[test]
fn watt_calculator() {
    let est = compute_watts(230.0, 10.0, 0.8);
    assert!(close(est.watts, 1840.0));
    assert!(close(est.kilowatts, 1.84));
    let est = compute_watts_from_text(" 12 ", "2.5", 1.0).expect("watts");
    assert!(close(est.watts, 30.0));
}

#[test]
fn power_factor_clamps_to_slider_range() {
    assert!(close(clamp_power_factor(0.2), 0.5));
    assert!(close(clamp_power_factor(1.4), 1.0));
    assert!(close(clamp_power_factor(0.87), 0.87));
}

#[test]
fn negative_inputs_pass_through() {
    let est = compute_watts(-230.0, 10.0, 1.0);
    assert!(close(est.watts, -2300.0));
}
