use std::collections::HashSet;

use uuid::Uuid;

/// 다중 선택 모드 상태. 프로젝트 목록과 부품 목록 양쪽에서 쓴다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    active: bool,
    selected: HashSet<Uuid>,
}

impl SelectionState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 선택 모드를 켜고 끈다. 끌 때 선택을 비운다.
    pub fn toggle_mode(&mut self) {
        self.active = !self.active;
        if !self.active {
            self.selected.clear();
        }
    }

    pub fn toggle(&mut self, id: Uuid) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// 개별 삭제된 항목을 선택에서도 뺀다.
    pub fn forget(&mut self, id: Uuid) {
        self.selected.remove(&id);
    }

    /// 일괄 삭제용으로 선택을 꺼내고 선택 모드를 끈다.
    pub fn take_for_delete(&mut self) -> HashSet<Uuid> {
        self.active = false;
        std::mem::take(&mut self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_selection_mode_clears_selection() {
        let mut sel = SelectionState::default();
        sel.toggle_mode();
        sel.toggle(Uuid::new_v4());
        assert_eq!(sel.len(), 1);
        sel.toggle_mode();
        assert!(!sel.is_active());
        assert!(sel.is_empty());
    }

    #[test]
    fn toggle_twice_deselects() {
        let mut sel = SelectionState::default();
        let id = Uuid::new_v4();
        sel.toggle(id);
        sel.toggle(id);
        assert!(!sel.is_selected(id));
    }

    #[test]
    fn take_for_delete_drains_and_exits() {
        let mut sel = SelectionState::default();
        sel.toggle_mode();
        let id = Uuid::new_v4();
        sel.toggle(id);
        let taken = sel.take_for_delete();
        assert!(taken.contains(&id));
        assert!(!sel.is_active());
        assert!(sel.is_empty());
    }
}
