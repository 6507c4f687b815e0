use power_plan_toolbox::calculators::{
    self, ElectricalQuantitySet, Phase, PhaseConfig, BREAKER_SAFETY_FACTOR,
};
use power_plan_toolbox::projects::{
    decode_projects, encode_projects, ComponentCategory, ComponentDraft, ProjectRegistry,
};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

proptest! {
    #[test]
    fn resistance_and_power_recover_voltage_and_current(
        voltage in 1.0f64..1000.0,
        current in 0.01f64..100.0,
    ) {
        let first = calculators::solve(&ElectricalQuantitySet {
            voltage: Some(voltage),
            current: Some(current),
            ..Default::default()
        })
        .expect("two inputs");
        let second = calculators::solve(&ElectricalQuantitySet {
            resistance: Some(first.resistance),
            power: Some(first.power),
            ..Default::default()
        })
        .expect("two inputs");
        prop_assert!(close(second.voltage, voltage));
        prop_assert!(close(second.current, current));
    }

    #[test]
    fn apparent_power_never_below_real_power(
        voltage in 0.0f64..1000.0,
        current in 0.0f64..500.0,
        pf in 0.5f64..=1.0,
        three_phase in any::<bool>(),
    ) {
        let estimate = calculators::estimate_power(&PhaseConfig {
            phase: if three_phase { Phase::Three } else { Phase::Single },
            voltage,
            current,
            power_factor: pf,
        });
        prop_assert!(estimate.apparent_power_va + 1e-9 >= estimate.real_power_w);
        prop_assert!(close(estimate.kilowatts * 1000.0, estimate.real_power_w));
    }

    #[test]
    fn breaker_is_current_with_margin_to_two_places(current in 0.0f64..1000.0) {
        let breaker = calculators::recommended_breaker(current);
        let expected = (current * BREAKER_SAFETY_FACTOR * 100.0).round() / 100.0;
        prop_assert!((breaker - expected).abs() < 1e-9);
        prop_assert!((breaker - current * BREAKER_SAFETY_FACTOR).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn voltage_drop_grows_with_length(
        length in 1.0f64..200.0,
        extra in 1.0f64..100.0,
        current in 0.1f64..63.0,
    ) {
        let run = |length_m| calculators::ConductorRun {
            length_m,
            load_current_a: current,
            conductor_area_mm2: calculators::DEFAULT_CONDUCTOR_AREA,
            supply_voltage_v: 230.0,
        };
        let short = calculators::estimate_voltage_drop(&run(length));
        let long = calculators::estimate_voltage_drop(&run(length + extra));
        prop_assert!(long.drop_v > short.drop_v);
        prop_assert!(long.percent_drop > short.percent_drop);
    }

    #[test]
    fn stored_registry_reads_back_unchanged(
        names in prop::collection::vec("[A-Za-z][A-Za-z0-9 ]{0,15}", 1..5),
        categories in prop::collection::vec(prop::sample::select(ComponentCategory::ALL.to_vec()), 0..8),
        quantity in 1u32..=500,
        tag in "[A-Z][0-9]{0,2}",
    ) {
        let mut registry = ProjectRegistry::new();
        for name in &names {
            let id = registry.add_project(name, "230 V", "", Vec::new()).expect("named");
            for category in &categories {
                let mut draft = ComponentDraft::new(*category);
                draft.tag = tag.clone();
                draft.set_quantity(quantity);
                if draft.can_save() {
                    registry.add_component(id, &mut draft).expect("saveable");
                }
            }
        }
        let bytes = encode_projects(registry.projects()).expect("encode");
        let decoded = decode_projects(&bytes).expect("decode");
        prop_assert_eq!(decoded.as_slice(), registry.projects());
    }
}
