use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 부품 분류. 직렬화 시 camelCase 이름(`thermalProtection` 등)을 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentCategory {
    Breaker,
    Contactor,
    ThermalProtection,
    Transformer,
    BoardSocket,
    SwitchPositions,
    Relay,
    KwhMeter,
    PlcCard,
    CircuitTerminal,
    Custom,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 11] = [
        ComponentCategory::Breaker,
        ComponentCategory::Contactor,
        ComponentCategory::ThermalProtection,
        ComponentCategory::Transformer,
        ComponentCategory::BoardSocket,
        ComponentCategory::SwitchPositions,
        ComponentCategory::Relay,
        ComponentCategory::KwhMeter,
        ComponentCategory::PlcCard,
        ComponentCategory::CircuitTerminal,
        ComponentCategory::Custom,
    ];

    /// 저장되는 부품 이름이자 그룹 정렬 기준.
    pub fn title(&self) -> &'static str {
        match self {
            ComponentCategory::Breaker => "Breaker",
            ComponentCategory::Contactor => "Contactor",
            ComponentCategory::ThermalProtection => "Thermal Protection",
            ComponentCategory::Transformer => "Transformer",
            ComponentCategory::BoardSocket => "Board Socket",
            ComponentCategory::SwitchPositions => "Switch",
            ComponentCategory::Relay => "Relay",
            ComponentCategory::KwhMeter => "kWh Meter",
            ComponentCategory::PlcCard => "PLC Card",
            ComponentCategory::CircuitTerminal => "Circuit Terminal",
            ComponentCategory::Custom => "Custom",
        }
    }

    /// 번역 키.
    pub fn i18n_key(&self) -> &'static str {
        use crate::i18n::keys::*;
        match self {
            ComponentCategory::Breaker => CATEGORY_BREAKER,
            ComponentCategory::Contactor => CATEGORY_CONTACTOR,
            ComponentCategory::ThermalProtection => CATEGORY_THERMAL,
            ComponentCategory::Transformer => CATEGORY_TRANSFORMER,
            ComponentCategory::BoardSocket => CATEGORY_BOARD_SOCKET,
            ComponentCategory::SwitchPositions => CATEGORY_SWITCH,
            ComponentCategory::Relay => CATEGORY_RELAY,
            ComponentCategory::KwhMeter => CATEGORY_KWH,
            ComponentCategory::PlcCard => CATEGORY_PLC,
            ComponentCategory::CircuitTerminal => CATEGORY_TERMINAL,
            ComponentCategory::Custom => CATEGORY_CUSTOM,
        }
    }
}

/// 차단기 트립 특성 곡선.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BreakerCurve {
    B,
    #[default]
    C,
    D,
    K,
    Z,
}

impl BreakerCurve {
    pub const ALL: [BreakerCurve; 5] = [
        BreakerCurve::B,
        BreakerCurve::C,
        BreakerCurve::D,
        BreakerCurve::K,
        BreakerCurve::Z,
    ];

    pub fn letter(&self) -> &'static str {
        match self {
            BreakerCurve::B => "B",
            BreakerCurve::C => "C",
            BreakerCurve::D => "D",
            BreakerCurve::K => "K",
            BreakerCurve::Z => "Z",
        }
    }
}

/// 릴레이 코일 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RelayCoilType {
    #[default]
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "DC")]
    Dc,
}

impl RelayCoilType {
    pub const ALL: [RelayCoilType; 2] = [RelayCoilType::Ac, RelayCoilType::Dc];

    pub fn label(&self) -> &'static str {
        match self {
            RelayCoilType::Ac => "AC",
            RelayCoilType::Dc => "DC",
        }
    }
}

/// 프로젝트에 기록된 부품 한 줄.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: Uuid,
    pub name: String,
    pub category: ComponentCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default)]
    pub details: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub acquired: bool,
}

fn default_quantity() -> u32 {
    1
}

impl Component {
    /// 이름만으로 만드는 사용자 정의 항목 (새 프로젝트 폼의 빠른 추가).
    pub fn custom(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4(),
            name: trimmed.to_string(),
            category: ComponentCategory::Custom,
            tag: None,
            primary: trimmed.to_string(),
            secondary: None,
            details: String::new(),
            quantity: 1,
            acquired: false,
        })
    }

    /// "Tag: X", "primary · secondary", 상세 설명 중 비어 있지 않은 것을 " — "로 잇는다.
    pub fn detail_line(&self) -> String {
        let option_text = std::iter::once(self.primary.as_str())
            .chain(self.secondary.as_deref())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" · ");
        let tag = self.tag.as_deref().map(str::trim).unwrap_or_default();
        let details = self.details.trim();

        let mut parts = Vec::new();
        if !tag.is_empty() {
            parts.push(format!("Tag: {tag}"));
        }
        if !option_text.is_empty() {
            parts.push(option_text);
        }
        if !details.is_empty() {
            parts.push(details.to_string());
        }
        parts.join(" — ")
    }
}
