use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::component::{Component, ComponentCategory};
use super::draft::{ComponentDraft, ProjectDraft, QUANTITY_MAX, QUANTITY_MIN};

/// 현장 1곳에 대한 프로젝트 기록. 부품 목록을 독점 소유한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub voltage: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Project {
    pub fn component(&self, id: Uuid) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// 확보(acquired) 표시된 부품 수 / 전체 부품 수.
    pub fn acquired_progress(&self) -> (usize, usize) {
        let done = self.components.iter().filter(|c| c.acquired).count();
        (done, self.components.len())
    }
}

/// 프로젝트 기본 정보 수정값 (편집 모드).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectEdit {
    pub name: Option<String>,
    pub voltage: Option<String>,
    pub notes: Option<String>,
}

/// 부품 수정값.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentEdit {
    /// `Some("")`이면 태그를 지운다.
    pub tag: Option<String>,
    pub details: Option<String>,
    pub quantity: Option<u32>,
}

/// 분류별로 묶은 부품 목록.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGroup<'a> {
    pub category: ComponentCategory,
    pub components: Vec<&'a Component>,
}

/// 순서를 유지하는 메모리 내 프로젝트 목록.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    fn project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    fn component_mut(&mut self, component_id: Uuid) -> Option<&mut Component> {
        self.projects
            .iter_mut()
            .flat_map(|p| p.components.iter_mut())
            .find(|c| c.id == component_id)
    }

    /// 프로젝트를 추가한다. 이름이 공백뿐이면 아무것도 하지 않고 None.
    pub fn add_project(
        &mut self,
        name: &str,
        voltage: &str,
        notes: &str,
        components: Vec<Component>,
    ) -> Option<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            debug!("empty project name, ignoring add");
            return None;
        }
        let project = Project {
            id: Uuid::new_v4(),
            name: name.to_string(),
            voltage: voltage.trim().to_string(),
            notes: notes.trim().to_string(),
            components,
        };
        let id = project.id;
        debug!("adding project {id} ({name})");
        self.projects.push(project);
        Some(id)
    }

    /// 새 프로젝트 폼 내용을 저장한다. 성공하면 폼을 비운다.
    pub fn add_project_from_draft(&mut self, draft: &mut ProjectDraft) -> Option<Uuid> {
        let components = draft.components.clone();
        let id = self.add_project(&draft.name, &draft.voltage, &draft.notes, components)?;
        draft.reset();
        Some(id)
    }

    /// 이름/전압/메모를 수정한다. 이름을 비우는 수정은 무시한다.
    pub fn update_project(&mut self, id: Uuid, edit: ProjectEdit) -> bool {
        let Some(project) = self.project_mut(id) else {
            return false;
        };
        if let Some(name) = edit.name {
            let name = name.trim();
            if !name.is_empty() {
                project.name = name.to_string();
            }
        }
        if let Some(voltage) = edit.voltage {
            project.voltage = voltage.trim().to_string();
        }
        if let Some(notes) = edit.notes {
            project.notes = notes.trim().to_string();
        }
        true
    }

    /// 프로젝트에 부품 초안을 추가한다. 저장할 수 없는 초안이거나 프로젝트가 없으면 None.
    /// 성공하면 초안을 초기화한다.
    pub fn add_component(&mut self, project_id: Uuid, draft: &mut ComponentDraft) -> Option<Uuid> {
        let component = match draft.build() {
            Ok(c) => c,
            Err(e) => {
                warn!("component draft rejected: {e}");
                return None;
            }
        };
        let project = self.project_mut(project_id)?;
        let id = component.id;
        debug!("adding component {id} to project {project_id}");
        project.components.push(component);
        draft.reset();
        Some(id)
    }

    /// 확보 여부를 뒤집는다. 부품이 없으면 false.
    pub fn toggle_acquired(&mut self, component_id: Uuid) -> bool {
        match self.component_mut(component_id) {
            Some(component) => {
                component.acquired = !component.acquired;
                true
            }
            None => false,
        }
    }

    pub fn edit_component(&mut self, component_id: Uuid, edit: ComponentEdit) -> bool {
        let Some(component) = self.component_mut(component_id) else {
            return false;
        };
        if let Some(tag) = edit.tag {
            let tag = tag.trim();
            component.tag = (!tag.is_empty()).then(|| tag.to_string());
        }
        if let Some(details) = edit.details {
            component.details = details.trim().to_string();
        }
        if let Some(quantity) = edit.quantity {
            component.quantity = quantity.clamp(QUANTITY_MIN, QUANTITY_MAX);
        }
        true
    }

    pub fn remove_project(&mut self, id: Uuid) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        before != self.projects.len()
    }

    /// 선택된 프로젝트를 한 번에 삭제한다. 남은 프로젝트 순서는 유지된다.
    pub fn delete_projects(&mut self, ids: &HashSet<Uuid>) -> usize {
        let before = self.projects.len();
        self.projects.retain(|p| !ids.contains(&p.id));
        before - self.projects.len()
    }

    pub fn remove_component(&mut self, project_id: Uuid, component_id: Uuid) -> bool {
        let mut ids = HashSet::new();
        ids.insert(component_id);
        self.delete_components(project_id, &ids) > 0
    }

    pub fn delete_components(&mut self, project_id: Uuid, ids: &HashSet<Uuid>) -> usize {
        let Some(project) = self.project_mut(project_id) else {
            return 0;
        };
        let before = project.components.len();
        project.components.retain(|c| !ids.contains(&c.id));
        before - project.components.len()
    }
}

/// 부품을 분류별로 묶는다. 그룹은 분류 이름순, 그룹 내부는 원래 순서.
pub fn component_groups(project: &Project) -> Vec<ComponentGroup<'_>> {
    let mut groups: Vec<ComponentGroup<'_>> = Vec::new();
    for component in &project.components {
        match groups.iter_mut().find(|g| g.category == component.category) {
            Some(group) => group.components.push(component),
            None => groups.push(ComponentGroup {
                category: component.category,
                components: vec![component],
            }),
        }
    }
    groups.sort_by(|a, b| a.category.title().cmp(b.category.title()));
    groups
}
