//! 저장된 프로젝트 목록의 스키마 마이그레이션.
//!
//! - v0: 부품 목록 키가 `equipment`
//! - v1: 부품 목록 키가 `component`
//! - v2: 현재 형식, `components`

use log::warn;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::draft::{QUANTITY_MAX, QUANTITY_MIN};
use super::registry::Project;
use super::store::StoreError;

pub const LATEST_VERSION: u32 = 2;

const KEY_V0: &str = "equipment";
const KEY_V1: &str = "component";
const KEY_V2: &str = "components";

/// 프로젝트 레코드 하나의 스키마 버전을 키 이름으로 판별한다.
pub fn detect_version(record: &Value) -> u32 {
    record.as_object().map_or(LATEST_VERSION, version_of)
}

fn version_of(obj: &Map<String, Value>) -> u32 {
    if obj.contains_key(KEY_V2) {
        2
    } else if obj.contains_key(KEY_V1) {
        1
    } else if obj.contains_key(KEY_V0) {
        0
    } else {
        LATEST_VERSION
    }
}

/// 저장된 JSON 배열을 최신 스키마로 올린 뒤 프로젝트 목록으로 디코드한다.
pub fn migrate_to_latest(blob: Value) -> Result<Vec<Project>, StoreError> {
    let Value::Array(records) = blob else {
        return Err(StoreError::Migration {
            what: "project blob is not a JSON array".to_string(),
        });
    };

    let mut projects = Vec::with_capacity(records.len());
    for (idx, record) in records.into_iter().enumerate() {
        let Value::Object(mut obj) = record else {
            return Err(StoreError::Migration {
                what: format!("project record {idx} is not an object"),
            });
        };
        let mut version = version_of(&obj);
        if version < LATEST_VERSION {
            warn!("project record {idx} uses legacy schema v{version}, migrating");
        }
        while version < LATEST_VERSION {
            version = migrate_one_version(&mut obj, version)?;
        }
        fill_missing_ids(&mut obj);
        let mut project: Project = serde_json::from_value(Value::Object(obj))?;
        clamp_quantities(&mut project);
        projects.push(project);
    }
    Ok(projects)
}

/// 손으로 고친 파일이나 가져온 파일의 수량을 1..=500으로 맞춘다.
fn clamp_quantities(project: &mut Project) {
    for component in &mut project.components {
        let clamped = component.quantity.clamp(QUANTITY_MIN, QUANTITY_MAX);
        if clamped != component.quantity {
            warn!(
                "component {} has quantity {}, using {clamped}",
                component.id, component.quantity
            );
            component.quantity = clamped;
        }
    }
}

fn migrate_one_version(obj: &mut Map<String, Value>, version: u32) -> Result<u32, StoreError> {
    match version {
        0 => {
            rename_key(obj, KEY_V0, KEY_V1);
            Ok(1)
        }
        1 => {
            rename_key(obj, KEY_V1, KEY_V2);
            Ok(2)
        }
        v => Err(StoreError::Migration {
            what: format!("no migration path from version {v}"),
        }),
    }
}

/// 새 키가 이미 있으면 옛 키는 버린다.
fn rename_key(obj: &mut Map<String, Value>, from: &str, to: &str) {
    if let Some(value) = obj.remove(from) {
        obj.entry(to.to_string()).or_insert(value);
    }
}

fn fill_missing_ids(obj: &mut Map<String, Value>) {
    obj.entry("id")
        .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
    if let Some(Value::Array(components)) = obj.get_mut(KEY_V2) {
        for component in components.iter_mut().filter_map(Value::as_object_mut) {
            component
                .entry("id")
                .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component_json() -> Value {
        json!({
            "id": "6f1c1b56-6f8e-4c55-9d3c-0f5b2f2b9a11",
            "name": "Breaker",
            "category": "breaker",
            "primary": "16 A",
            "secondary": "B",
            "details": "",
            "quantity": 4,
            "acquired": true
        })
    }

    #[test]
    fn latest_records_are_untouched() {
        let blob = json!([{
            "id": "0b7e7c0e-2f6a-4b1e-9f0c-1b3f7a2d4c55",
            "name": "Garage",
            "voltage": "230 V",
            "notes": "",
            "components": [component_json()]
        }]);
        let projects = migrate_to_latest(blob).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].components.len(), 1);
        assert_eq!(projects[0].components[0].quantity, 4);
    }

    #[test]
    fn legacy_component_key_is_renamed() {
        let record = json!({"name": "Old", "component": [component_json()]});
        assert_eq!(detect_version(&record), 1);
        let projects = migrate_to_latest(json!([record])).unwrap();
        assert_eq!(projects[0].components.len(), 1);
        assert_eq!(projects[0].components[0].primary, "16 A");
    }

    #[test]
    fn equipment_key_migrates_through_every_version() {
        let record = json!({"name": "Older", "equipment": [component_json()]});
        assert_eq!(detect_version(&record), 0);
        let projects = migrate_to_latest(json!([record])).unwrap();
        assert_eq!(projects[0].components.len(), 1);
        assert_eq!(projects[0].voltage, "");
    }

    #[test]
    fn non_array_blob_is_rejected() {
        let err = migrate_to_latest(json!({"projects": []})).unwrap_err();
        assert!(matches!(err, StoreError::Migration { .. }));
    }
}
