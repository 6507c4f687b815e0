use std::collections::HashSet;

use power_plan_toolbox::projects::{
    component_groups, BreakerCurve, ComponentCategory, ComponentDraft, ComponentEdit,
    ComponentSpec, DraftError, KwhConfiguration, ProjectDraft, ProjectEdit, ProjectRegistry,
    RelayCoilType, SelectionState, QUANTITY_MAX, QUANTITY_MIN,
};

fn registry_with(names: &[&str]) -> ProjectRegistry {
    let mut reg = ProjectRegistry::new();
    for name in names {
        reg.add_project(name, "230 V", "", Vec::new()).expect("add");
    }
    reg
}

#[test]
fn blank_project_name_is_ignored() {
    let mut reg = ProjectRegistry::new();
    assert!(reg.add_project("   ", "230 V", "notes", Vec::new()).is_none());
    assert!(reg.is_empty());
}

#[test]
fn project_fields_are_trimmed() {
    let mut reg = ProjectRegistry::new();
    let id = reg
        .add_project("  Garage  ", " 400 V ", " three phase ", Vec::new())
        .expect("add");
    let project = reg.project(id).expect("project");
    assert_eq!(project.name, "Garage");
    assert_eq!(project.voltage, "400 V");
    assert_eq!(project.notes, "three phase");
}

#[test]
fn breaker_defaults_to_63_amps_curve_c() {
    let mut reg = registry_with(&["Board"]);
    let project_id = reg.projects()[0].id;
    let mut draft = ComponentDraft::new(ComponentCategory::Breaker);
    assert_eq!(
        draft.spec,
        ComponentSpec::Breaker {
            amps: 63,
            curve: BreakerCurve::C
        }
    );
    let id = reg.add_component(project_id, &mut draft).expect("component");
    let component = reg.project(project_id).and_then(|p| p.component(id)).expect("stored");
    assert_eq!(component.name, "Breaker");
    assert_eq!(component.primary, "63 A");
    assert_eq!(component.secondary.as_deref(), Some("C"));
    assert_eq!(component.quantity, 1);
    assert!(!component.acquired);
    // 성공하면 초안은 초기화된다.
    assert_eq!(draft, ComponentDraft::default());
}

#[test]
fn plc_card_needs_brand_and_model() {
    let mut reg = registry_with(&["Plant"]);
    let project_id = reg.projects()[0].id;
    let mut draft = ComponentDraft::new(ComponentCategory::PlcCard);
    draft.spec = ComponentSpec::PlcCard {
        brand: "Siemens".into(),
        model: "  ".into(),
        option_note: String::new(),
    };
    assert!(!draft.can_save());
    assert_eq!(
        draft.build().unwrap_err(),
        DraftError::UnsaveableDraft {
            category: ComponentCategory::PlcCard
        }
    );
    assert!(reg.add_component(project_id, &mut draft).is_none());
    assert!(reg.projects()[0].components.is_empty());

    draft.spec = ComponentSpec::PlcCard {
        brand: "Siemens".into(),
        model: "S7-1200".into(),
        option_note: "DI 16".into(),
    };
    let component = draft.build().expect("build");
    assert_eq!(component.primary, "Siemens · S7-1200");
    assert_eq!(component.secondary.as_deref(), Some("DI 16"));
}

#[test]
fn empty_text_categories_cannot_be_saved() {
    for category in [
        ComponentCategory::BoardSocket,
        ComponentCategory::CircuitTerminal,
        ComponentCategory::Custom,
    ] {
        assert!(!ComponentDraft::new(category).can_save(), "{category:?}");
    }
    for category in [
        ComponentCategory::Contactor,
        ComponentCategory::Transformer,
        ComponentCategory::SwitchPositions,
        ComponentCategory::Relay,
        ComponentCategory::KwhMeter,
    ] {
        assert!(ComponentDraft::new(category).can_save(), "{category:?}");
    }
}

#[test]
fn derived_descriptions_per_category() {
    let contactor = ComponentSpec::Contactor { poles: 3, amps: 25 };
    assert_eq!(contactor.primary_description(), "3 poles · 25 A");
    assert_eq!(contactor.secondary_description(), None);

    let relay = ComponentSpec::Relay {
        voltage: 24,
        coil: RelayCoilType::Dc,
    };
    assert_eq!(relay.primary_description(), "24 V");
    assert_eq!(relay.secondary_description().as_deref(), Some("DC"));

    let kwh = ComponentSpec::KwhMeter {
        configuration: KwhConfiguration::ThreePhase,
        option_note: " ".into(),
    };
    assert_eq!(kwh.primary_description(), "Three Phase");
    assert_eq!(kwh.secondary_description(), None);

    assert_eq!(
        ComponentSpec::default_for(ComponentCategory::Transformer).primary_description(),
        "400 W"
    );
    assert_eq!(
        ComponentSpec::SwitchPositions { positions: 4 }.primary_description(),
        "4 positions"
    );

    let custom = ComponentSpec::Custom {
        label: " UPS ".into(),
        option_note: String::new(),
    };
    assert_eq!(custom.display_name(), "UPS");
}

#[test]
fn changing_category_resets_payload() {
    let mut draft = ComponentDraft::new(ComponentCategory::Breaker);
    draft.spec = ComponentSpec::Breaker {
        amps: 16,
        curve: BreakerCurve::B,
    };
    draft.set_category(ComponentCategory::Breaker);
    assert_eq!(
        draft.spec,
        ComponentSpec::Breaker {
            amps: 16,
            curve: BreakerCurve::B
        }
    );
    draft.set_category(ComponentCategory::Relay);
    assert_eq!(
        draft.spec,
        ComponentSpec::Relay {
            voltage: 24,
            coil: RelayCoilType::Ac
        }
    );
}

#[test]
fn quantity_is_clamped() {
    let mut draft = ComponentDraft::default();
    draft.set_quantity(0);
    assert_eq!(draft.quantity(), QUANTITY_MIN);
    draft.set_quantity(10_000);
    assert_eq!(draft.quantity(), QUANTITY_MAX);
    draft.set_quantity(12);
    assert_eq!(draft.quantity(), 12);
}

#[test]
fn tag_and_details_are_trimmed() {
    let mut draft = ComponentDraft::new(ComponentCategory::Breaker);
    draft.tag = "   ".into();
    draft.additional_info = "  spare  ".into();
    let component = draft.build().expect("build");
    assert_eq!(component.tag, None);
    assert_eq!(component.details, "spare");

    draft.tag = " Q1 ".into();
    let component = draft.build().expect("build");
    assert_eq!(component.tag.as_deref(), Some("Q1"));
    assert_eq!(component.detail_line(), "Tag: Q1 — 63 A · C — spare");
}

#[test]
fn bulk_delete_keeps_remaining_order() {
    let mut reg = registry_with(&["A", "B", "C", "D"]);
    let ids: Vec<_> = reg.projects().iter().map(|p| p.id).collect();
    let doomed: HashSet<_> = [ids[1], ids[3]].into_iter().collect();
    assert_eq!(reg.delete_projects(&doomed), 2);
    let names: Vec<_> = reg.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "C"]);
}

#[test]
fn components_group_by_category_title() {
    let mut reg = registry_with(&["Board"]);
    let project_id = reg.projects()[0].id;
    for category in [
        ComponentCategory::Relay,
        ComponentCategory::Breaker,
        ComponentCategory::Relay,
        ComponentCategory::Contactor,
    ] {
        let mut draft = ComponentDraft::new(category);
        reg.add_component(project_id, &mut draft).expect("component");
    }
    let project = reg.project(project_id).expect("project");
    let groups = component_groups(project);
    let titles: Vec<_> = groups.iter().map(|g| g.category.title()).collect();
    assert_eq!(titles, ["Breaker", "Contactor", "Relay"]);
    let relays: Vec<_> = groups[2].components.iter().map(|c| c.id).collect();
    let expected: Vec<_> = project
        .components
        .iter()
        .filter(|c| c.category == ComponentCategory::Relay)
        .map(|c| c.id)
        .collect();
    assert_eq!(relays, expected);
}

#[test]
fn toggling_acquired_twice_restores_value() {
    let mut reg = registry_with(&["Board"]);
    let project_id = reg.projects()[0].id;
    let mut draft = ComponentDraft::default();
    let id = reg.add_component(project_id, &mut draft).expect("component");
    assert!(reg.toggle_acquired(id));
    assert!(reg.projects()[0].components[0].acquired);
    assert!(reg.toggle_acquired(id));
    assert!(!reg.projects()[0].components[0].acquired);
    assert!(!reg.toggle_acquired(uuid::Uuid::new_v4()));
}

#[test]
fn project_edits_are_trimmed() {
    let mut reg = registry_with(&["Board"]);
    let project_id = reg.projects()[0].id;
    assert!(reg.update_project(
        project_id,
        ProjectEdit {
            name: Some("  B  ".into()),
            voltage: Some(" 400 V ".into()),
            notes: Some("\n attic \n".into()),
        }
    ));
    let project = &reg.projects()[0];
    assert_eq!(project.name, "B");
    assert_eq!(project.voltage, "400 V");
    assert_eq!(project.notes, "attic");

    assert!(reg.update_project(
        project_id,
        ProjectEdit {
            name: Some("   ".into()),
            ..ProjectEdit::default()
        }
    ));
    assert_eq!(reg.projects()[0].name, "B");
}

#[test]
fn editing_project_and_component() {
    let mut reg = registry_with(&["Board"]);
    let project_id = reg.projects()[0].id;
    assert!(reg.update_project(
        project_id,
        ProjectEdit {
            name: Some("".into()),
            notes: Some("ground floor".into()),
            ..ProjectEdit::default()
        }
    ));
    assert_eq!(reg.projects()[0].name, "Board");
    assert_eq!(reg.projects()[0].notes, "ground floor");

    let mut draft = ComponentDraft::default();
    let id = reg.add_component(project_id, &mut draft).expect("component");
    assert!(reg.edit_component(
        id,
        ComponentEdit {
            tag: Some("Q3".into()),
            quantity: Some(900),
            ..ComponentEdit::default()
        }
    ));
    let component = &reg.projects()[0].components[0];
    assert_eq!(component.tag.as_deref(), Some("Q3"));
    assert_eq!(component.quantity, QUANTITY_MAX);
}

#[test]
fn component_removal() {
    let mut reg = registry_with(&["Board"]);
    let project_id = reg.projects()[0].id;
    let mut ids = Vec::new();
    for _ in 0..3 {
        let mut draft = ComponentDraft::default();
        ids.push(reg.add_component(project_id, &mut draft).expect("component"));
    }
    assert!(reg.remove_component(project_id, ids[0]));
    assert!(!reg.remove_component(project_id, ids[0]));
    let rest: HashSet<_> = ids[1..].iter().copied().collect();
    assert_eq!(reg.delete_components(project_id, &rest), 2);
    assert!(reg.projects()[0].components.is_empty());
}

#[test]
fn project_draft_collects_pending_components() {
    let mut draft = ProjectDraft::default();
    draft.name = "Workshop".into();
    draft.component_draft.set_category(ComponentCategory::Transformer);
    assert!(draft.commit_component().is_some());
    assert!(draft.add_custom_item("  Cable tray ").is_some());
    assert!(draft.add_custom_item("   ").is_none());
    assert_eq!(draft.components.len(), 2);
    assert_eq!(draft.components[1].name, "Cable tray");
    assert_eq!(draft.components[1].category, ComponentCategory::Custom);

    let mut reg = ProjectRegistry::new();
    let id = reg.add_project_from_draft(&mut draft).expect("project");
    assert_eq!(reg.project(id).expect("project").components.len(), 2);
    assert_eq!(draft, ProjectDraft::default());
}

#[test]
fn selection_mode_drains_on_delete() {
    let mut selection = SelectionState::default();
    selection.toggle_mode();
    let id = uuid::Uuid::new_v4();
    selection.toggle(id);
    assert!(selection.is_selected(id));
    let taken = selection.take_for_delete();
    assert!(taken.contains(&id));
    assert!(!selection.is_active());
    assert!(selection.is_empty());
}
