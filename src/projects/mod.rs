//! 현장별 프로젝트와 부품 기록.
//! 메모리 내 목록, 부품 초안, 선택 모드, 로컬 저장과 스키마 마이그레이션으로 구성한다.

pub mod component;
pub mod draft;
pub mod migrate;
pub mod registry;
pub mod selection;
pub mod store;

pub use component::*;
pub use draft::*;
pub use registry::*;
pub use selection::SelectionState;
pub use store::*;
