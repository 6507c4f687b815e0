//! 전기 작업용 계산/기록 로직을 라이브러리로 분리하여 CLI와 GUI가 같은 코드를 쓰게 한다.

pub mod app;
pub mod calculators;
pub mod config;
pub mod i18n;
pub mod projects;
pub mod quantity;
pub mod reference;
pub mod report;
pub mod ui_cli;
