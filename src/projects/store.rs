use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use uuid::Uuid;

use super::component::Component;
use super::draft::{ComponentDraft, ProjectDraft};
use super::migrate::migrate_to_latest;
use super::registry::{ComponentEdit, Project, ProjectEdit, ProjectRegistry};

/// 프로젝트 목록이 저장되는 고정 키.
pub const PROJECTS_KEY: &str = "projects";

/// 저장소 입출력/디코드 오류.
#[derive(Debug)]
pub enum StoreError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// JSON 직렬화/역직렬화 오류
    Json(serde_json::Error),
    /// 스키마 마이그레이션 오류
    Migration { what: String },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Json(e) => write!(f, "project data error: {e}"),
            StoreError::Migration { what } => write!(f, "migration error: {what}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        StoreError::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        StoreError::Json(value)
    }
}

/// 키 하나에 바이트 덩어리 하나를 저장하는 로컬 키-값 저장소.
pub trait BlobStore {
    /// 값이 없으면 `Ok(None)`.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}

/// 디렉터리 아래 `<key>.json` 파일로 저장한다.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read(path)?))
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }
}

/// 테스트/임시 용도의 메모리 저장소.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), bytes.into());
        store
    }
}

impl BlobStore for MemoryBlobStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// 프로젝트 목록을 JSON 배열로 직렬화한다.
pub fn encode_projects(projects: &[Project]) -> Result<Vec<u8>, StoreError> {
    Ok(serde_json::to_vec_pretty(projects)?)
}

/// 저장된 바이트를 최신 스키마로 마이그레이션하며 디코드한다.
pub fn decode_projects(bytes: &[u8]) -> Result<Vec<Project>, StoreError> {
    let raw: serde_json::Value = serde_json::from_slice(bytes)?;
    migrate_to_latest(raw)
}

/// 프로젝트 목록과 저장소를 묶는다. 변경 연산마다 전체 목록을 다시 저장한다.
pub struct ProjectStore {
    registry: ProjectRegistry,
    backend: Box<dyn BlobStore>,
}

impl ProjectStore {
    /// 빈 목록으로 시작한다. 기존 데이터는 `load()`로 읽는다.
    pub fn new(backend: Box<dyn BlobStore>) -> Self {
        Self {
            registry: ProjectRegistry::new(),
            backend,
        }
    }

    /// `<dir>/projects.json` 파일 저장소를 열고 곧바로 읽어 들인다.
    pub fn open_dir(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        info!("opening project store in {}", dir.display());
        let mut store = Self::new(Box::new(FileBlobStore::new(dir)));
        store.load()?;
        Ok(store)
    }

    /// 저장된 목록을 읽는다. 값이 없으면 빈 목록.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let projects = match self.backend.read(PROJECTS_KEY)? {
            Some(bytes) => decode_projects(&bytes)?,
            None => Vec::new(),
        };
        info!("loaded {} project(s)", projects.len());
        self.registry = ProjectRegistry::from_projects(projects);
        Ok(())
    }

    /// 전체 목록을 저장한다. 마지막 저장이 이긴다.
    pub fn persist(&mut self) -> Result<(), StoreError> {
        let bytes = encode_projects(self.registry.projects())?;
        self.backend.write(PROJECTS_KEY, &bytes)?;
        debug!("persisted {} project(s)", self.registry.len());
        Ok(())
    }

    pub fn registry(&self) -> &ProjectRegistry {
        &self.registry
    }

    pub fn projects(&self) -> &[Project] {
        self.registry.projects()
    }

    pub fn add_project(
        &mut self,
        name: &str,
        voltage: &str,
        notes: &str,
        components: Vec<Component>,
    ) -> Result<Option<Uuid>, StoreError> {
        let id = self.registry.add_project(name, voltage, notes, components);
        self.persist_if(id.is_some())?;
        Ok(id)
    }

    pub fn add_project_from_draft(
        &mut self,
        draft: &mut ProjectDraft,
    ) -> Result<Option<Uuid>, StoreError> {
        let id = self.registry.add_project_from_draft(draft);
        self.persist_if(id.is_some())?;
        Ok(id)
    }

    pub fn update_project(&mut self, id: Uuid, edit: ProjectEdit) -> Result<bool, StoreError> {
        let changed = self.registry.update_project(id, edit);
        self.persist_if(changed)?;
        Ok(changed)
    }

    pub fn add_component(
        &mut self,
        project_id: Uuid,
        draft: &mut ComponentDraft,
    ) -> Result<Option<Uuid>, StoreError> {
        let id = self.registry.add_component(project_id, draft);
        self.persist_if(id.is_some())?;
        Ok(id)
    }

    pub fn toggle_acquired(&mut self, component_id: Uuid) -> Result<bool, StoreError> {
        let changed = self.registry.toggle_acquired(component_id);
        self.persist_if(changed)?;
        Ok(changed)
    }

    pub fn edit_component(
        &mut self,
        component_id: Uuid,
        edit: ComponentEdit,
    ) -> Result<bool, StoreError> {
        let changed = self.registry.edit_component(component_id, edit);
        self.persist_if(changed)?;
        Ok(changed)
    }

    pub fn remove_project(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let changed = self.registry.remove_project(id);
        self.persist_if(changed)?;
        Ok(changed)
    }

    pub fn delete_projects(&mut self, ids: &HashSet<Uuid>) -> Result<usize, StoreError> {
        let removed = self.registry.delete_projects(ids);
        self.persist_if(removed > 0)?;
        Ok(removed)
    }

    pub fn remove_component(
        &mut self,
        project_id: Uuid,
        component_id: Uuid,
    ) -> Result<bool, StoreError> {
        let changed = self.registry.remove_component(project_id, component_id);
        self.persist_if(changed)?;
        Ok(changed)
    }

    pub fn delete_components(
        &mut self,
        project_id: Uuid,
        ids: &HashSet<Uuid>,
    ) -> Result<usize, StoreError> {
        let removed = self.registry.delete_components(project_id, ids);
        self.persist_if(removed > 0)?;
        Ok(removed)
    }

    /// 현재 목록을 사용자가 고른 파일로 내보낸다.
    pub fn export_to(&self, path: &Path) -> Result<(), StoreError> {
        let bytes = encode_projects(self.registry.projects())?;
        fs::write(path, bytes)?;
        info!("exported {} project(s) to {}", self.registry.len(), path.display());
        Ok(())
    }

    /// 파일에서 목록을 읽어 현재 목록을 대체하고 저장한다.
    pub fn import_from(&mut self, path: &Path) -> Result<usize, StoreError> {
        let bytes = fs::read(path)?;
        let projects = decode_projects(&bytes)?;
        let count = projects.len();
        self.registry = ProjectRegistry::from_projects(projects);
        self.persist()?;
        info!("imported {count} project(s) from {}", path.display());
        Ok(count)
    }

    fn persist_if(&mut self, changed: bool) -> Result<(), StoreError> {
        if changed {
            self.persist()
        } else {
            Ok(())
        }
    }
}
