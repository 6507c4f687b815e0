use std::collections::HashSet;

use power_plan_toolbox::projects::{
    decode_projects, encode_projects, migrate, BlobStore, ComponentCategory, ComponentDraft,
    ComponentSpec, FileBlobStore, MemoryBlobStore, ProjectStore, StoreError, PROJECTS_KEY,
};
use serde_json::json;

fn seeded_store() -> ProjectStore {
    let mut store = ProjectStore::new(Box::new(MemoryBlobStore::new()));
    let id = store
        .add_project("Garage", "230 V", "sub-board", Vec::new())
        .expect("persist")
        .expect("project");
    let mut draft = ComponentDraft::new(ComponentCategory::Relay);
    draft.tag = "K1".into();
    draft.set_quantity(3);
    store.add_component(id, &mut draft).expect("persist");
    let mut draft = ComponentDraft::new(ComponentCategory::PlcCard);
    draft.spec = ComponentSpec::PlcCard {
        brand: "Beckhoff".into(),
        model: "EL1008".into(),
        option_note: String::new(),
    };
    store.add_component(id, &mut draft).expect("persist");
    store
}

#[test]
fn encode_then_decode_is_identical() {
    let store = seeded_store();
    let bytes = encode_projects(store.projects()).expect("encode");
    let decoded = decode_projects(&bytes).expect("decode");
    assert_eq!(decoded, store.projects());
}

#[test]
fn missing_blob_loads_empty_registry() {
    let mut store = ProjectStore::new(Box::new(MemoryBlobStore::new()));
    store.load().expect("load");
    assert!(store.projects().is_empty());
}

#[test]
fn persisted_layout_uses_camel_case_categories() {
    let store = seeded_store();
    let bytes = encode_projects(store.projects()).expect("encode");
    let value: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
    let component = &value[0]["components"][1];
    assert_eq!(component["category"], "plcCard");
    assert_eq!(component["primary"], "Beckhoff · EL1008");
    assert!(component.get("tag").is_none());
    assert_eq!(value[0]["components"][0]["quantity"], 3);
}

#[test]
fn legacy_keys_decode_like_current_key() {
    let component = json!({
        "id": "6f1c1b56-6f8e-4c55-9d3c-0f5b2f2b9a11",
        "name": "Transformer",
        "category": "transformer",
        "primary": "400 W"
    });
    let expected = decode_projects(
        json!([{"id": "0b7e7c0e-2f6a-4b1e-9f0c-1b3f7a2d4c55", "name": "Shed", "components": [component.clone()]}])
            .to_string()
            .as_bytes(),
    )
    .expect("current");
    for key in ["component", "equipment"] {
        let mut record = json!({"id": "0b7e7c0e-2f6a-4b1e-9f0c-1b3f7a2d4c55", "name": "Shed"});
        record[key] = json!([component.clone()]);
        let legacy = json!([record]);
        assert!(migrate::detect_version(&legacy[0]) < migrate::LATEST_VERSION);
        let decoded = decode_projects(legacy.to_string().as_bytes()).expect("legacy");
        assert_eq!(decoded, expected, "{key}");
    }
    assert_eq!(expected[0].components[0].quantity, 1);
    assert!(!expected[0].components[0].acquired);
}

#[test]
fn records_without_ids_get_fresh_ones() {
    let blob = json!([{"name": "No id", "components": [{"name": "Switch", "category": "switchPositions", "primary": "2 positions"}]}]);
    let decoded = decode_projects(blob.to_string().as_bytes()).expect("decode");
    assert!(!decoded[0].id.is_nil());
    assert!(!decoded[0].components[0].id.is_nil());
}

#[test]
fn out_of_range_quantities_are_clamped_on_load() {
    let blob = json!([{"name": "x", "components": [
        {"name": "B", "category": "breaker", "primary": "1 A", "quantity": 0},
        {"name": "R", "category": "relay", "primary": "24 V", "quantity": 9000},
        {"name": "K", "category": "contactor", "primary": "3 poles · 25 A", "quantity": 7}
    ]}]);
    let decoded = decode_projects(blob.to_string().as_bytes()).expect("decode");
    let quantities: Vec<u32> = decoded[0].components.iter().map(|c| c.quantity).collect();
    assert_eq!(quantities, vec![1, 500, 7]);
}

#[test]
fn malformed_blob_is_an_error() {
    let mut store = ProjectStore::new(Box::new(MemoryBlobStore::with_entry(
        PROJECTS_KEY,
        b"{not json".to_vec(),
    )));
    assert!(matches!(store.load(), Err(StoreError::Json(_))));
    let mut store = ProjectStore::new(Box::new(MemoryBlobStore::with_entry(
        PROJECTS_KEY,
        b"{\"projects\": []}".to_vec(),
    )));
    assert!(matches!(store.load(), Err(StoreError::Migration { .. })));
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProjectStore::open_dir(dir.path()).expect("open");
    let a = store
        .add_project("A", "", "", Vec::new())
        .expect("persist")
        .expect("project");
    store.add_project("B", "", "", Vec::new()).expect("persist");
    let mut draft = ComponentDraft::default();
    let component = store
        .add_component(a, &mut draft)
        .expect("persist")
        .expect("component");
    store.toggle_acquired(component).expect("persist");

    assert!(FileBlobStore::new(dir.path()).path_for(PROJECTS_KEY).exists());
    let reopened = ProjectStore::open_dir(dir.path()).expect("reopen");
    assert_eq!(reopened.projects(), store.projects());
    assert!(reopened.projects()[0].components[0].acquired);
}

#[test]
fn bulk_delete_is_persisted() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = ProjectStore::open_dir(dir.path()).expect("open");
    let mut ids = HashSet::new();
    for name in ["A", "B", "C"] {
        let id = store
            .add_project(name, "", "", Vec::new())
            .expect("persist")
            .expect("project");
        if name != "B" {
            ids.insert(id);
        }
    }
    assert_eq!(store.delete_projects(&ids).expect("persist"), 2);
    let reopened = ProjectStore::open_dir(dir.path()).expect("reopen");
    assert_eq!(reopened.projects().len(), 1);
    assert_eq!(reopened.projects()[0].name, "B");
}

#[test]
fn export_and_import_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = seeded_store();
    let path = dir.path().join("export.json");
    source.export_to(&path).expect("export");

    let mut target = ProjectStore::open_dir(dir.path().join("data")).expect("open");
    assert_eq!(target.import_from(&path).expect("import"), 1);
    assert_eq!(target.projects(), source.projects());
    let reopened = ProjectStore::open_dir(dir.path().join("data")).expect("reopen");
    assert_eq!(reopened.projects(), source.projects());
}

#[test]
fn memory_store_reads_back_writes() {
    let mut backend = MemoryBlobStore::new();
    assert!(backend.read("x").expect("read").is_none());
    backend.write("x", b"[]").expect("write");
    assert_eq!(backend.read("x").expect("read"), Some(b"[]".to_vec()));
}
