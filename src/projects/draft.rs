use uuid::Uuid;

use super::component::{BreakerCurve, Component, ComponentCategory, RelayCoilType};

/// 수량 하한/상한.
pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 500;

/// 차단기/접촉기/열동계전기 전류 선택지 [A].
pub const AMP_OPTIONS: std::ops::RangeInclusive<u32> = 1..=1000;
/// 접촉기 극수 선택지.
pub const POLE_OPTIONS: std::ops::RangeInclusive<u8> = 1..=6;
/// 셀렉터 스위치 포지션 선택지.
pub const SWITCH_POSITION_OPTIONS: std::ops::RangeInclusive<u8> = 2..=6;
/// 릴레이 코일 전압 선택지 [V].
pub const RELAY_VOLTAGE_OPTIONS: [u32; 6] = [12, 24, 48, 110, 120, 230];

/// 변압기 용량 선택지 [W]: 50~1000 (50 간격), 1200~5000 (200 간격).
pub fn transformer_watt_options() -> Vec<u32> {
    (50..=1000)
        .step_by(50)
        .chain((1200..=5000).step_by(200))
        .collect()
}

/// kWh 미터 상 구성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KwhConfiguration {
    #[default]
    SinglePhase,
    ThreePhase,
}

impl KwhConfiguration {
    pub fn label(&self) -> &'static str {
        match self {
            KwhConfiguration::SinglePhase => "Single Phase",
            KwhConfiguration::ThreePhase => "Three Phase",
        }
    }
}

/// 분류별 입력 항목. 분류마다 필요한 필드만 가진다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentSpec {
    Breaker { amps: u32, curve: BreakerCurve },
    Contactor { poles: u8, amps: u32 },
    ThermalProtection { amps: u32 },
    Transformer { watts: u32 },
    BoardSocket { option_note: String },
    SwitchPositions { positions: u8 },
    Relay { voltage: u32, coil: RelayCoilType },
    KwhMeter { configuration: KwhConfiguration, option_note: String },
    PlcCard { brand: String, model: String, option_note: String },
    CircuitTerminal { terminal_type: String, option_note: String },
    Custom { label: String, option_note: String },
}

impl Default for ComponentSpec {
    fn default() -> Self {
        ComponentSpec::default_for(ComponentCategory::Breaker)
    }
}

impl ComponentSpec {
    /// 분류별 기본 입력값.
    pub fn default_for(category: ComponentCategory) -> Self {
        match category {
            ComponentCategory::Breaker => ComponentSpec::Breaker {
                amps: 63,
                curve: BreakerCurve::C,
            },
            ComponentCategory::Contactor => ComponentSpec::Contactor { poles: 3, amps: 63 },
            ComponentCategory::ThermalProtection => ComponentSpec::ThermalProtection { amps: 63 },
            ComponentCategory::Transformer => ComponentSpec::Transformer { watts: 400 },
            ComponentCategory::BoardSocket => ComponentSpec::BoardSocket {
                option_note: String::new(),
            },
            ComponentCategory::SwitchPositions => ComponentSpec::SwitchPositions { positions: 2 },
            ComponentCategory::Relay => ComponentSpec::Relay {
                voltage: 24,
                coil: RelayCoilType::Ac,
            },
            ComponentCategory::KwhMeter => ComponentSpec::KwhMeter {
                configuration: KwhConfiguration::SinglePhase,
                option_note: String::new(),
            },
            ComponentCategory::PlcCard => ComponentSpec::PlcCard {
                brand: String::new(),
                model: String::new(),
                option_note: String::new(),
            },
            ComponentCategory::CircuitTerminal => ComponentSpec::CircuitTerminal {
                terminal_type: String::new(),
                option_note: String::new(),
            },
            ComponentCategory::Custom => ComponentSpec::Custom {
                label: String::new(),
                option_note: String::new(),
            },
        }
    }

    pub fn category(&self) -> ComponentCategory {
        match self {
            ComponentSpec::Breaker { .. } => ComponentCategory::Breaker,
            ComponentSpec::Contactor { .. } => ComponentCategory::Contactor,
            ComponentSpec::ThermalProtection { .. } => ComponentCategory::ThermalProtection,
            ComponentSpec::Transformer { .. } => ComponentCategory::Transformer,
            ComponentSpec::BoardSocket { .. } => ComponentCategory::BoardSocket,
            ComponentSpec::SwitchPositions { .. } => ComponentCategory::SwitchPositions,
            ComponentSpec::Relay { .. } => ComponentCategory::Relay,
            ComponentSpec::KwhMeter { .. } => ComponentCategory::KwhMeter,
            ComponentSpec::PlcCard { .. } => ComponentCategory::PlcCard,
            ComponentSpec::CircuitTerminal { .. } => ComponentCategory::CircuitTerminal,
            ComponentSpec::Custom { .. } => ComponentCategory::Custom,
        }
    }

    /// 저장될 부품 이름. 사용자 정의는 라벨, 나머지는 분류 이름.
    pub fn display_name(&self) -> String {
        match self {
            ComponentSpec::Custom { label, .. } if !label.trim().is_empty() => {
                label.trim().to_string()
            }
            other => other.category().title().to_string(),
        }
    }

    pub fn primary_description(&self) -> String {
        match self {
            ComponentSpec::Breaker { amps, .. } => format!("{amps} A"),
            ComponentSpec::Contactor { poles, amps } => format!("{poles} poles · {amps} A"),
            ComponentSpec::ThermalProtection { amps } => format!("{amps} A"),
            ComponentSpec::Transformer { watts } => format!("{watts} W"),
            ComponentSpec::BoardSocket { option_note } => option_note.trim().to_string(),
            ComponentSpec::SwitchPositions { positions } => format!("{positions} positions"),
            ComponentSpec::Relay { voltage, .. } => format!("{voltage} V"),
            ComponentSpec::KwhMeter { configuration, .. } => configuration.label().to_string(),
            ComponentSpec::PlcCard { brand, model, .. } => [brand.trim(), model.trim()]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" · "),
            ComponentSpec::CircuitTerminal { terminal_type, .. } => {
                terminal_type.trim().to_string()
            }
            ComponentSpec::Custom { label, .. } => label.trim().to_string(),
        }
    }

    pub fn secondary_description(&self) -> Option<String> {
        let note = |s: &str| {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        };
        match self {
            ComponentSpec::Breaker { curve, .. } => Some(curve.letter().to_string()),
            ComponentSpec::Relay { coil, .. } => Some(coil.label().to_string()),
            ComponentSpec::KwhMeter { option_note, .. }
            | ComponentSpec::PlcCard { option_note, .. }
            | ComponentSpec::CircuitTerminal { option_note, .. }
            | ComponentSpec::Custom { option_note, .. } => note(option_note),
            ComponentSpec::Contactor { .. }
            | ComponentSpec::ThermalProtection { .. }
            | ComponentSpec::Transformer { .. }
            | ComponentSpec::BoardSocket { .. }
            | ComponentSpec::SwitchPositions { .. } => None,
        }
    }

    /// PLC 카드는 브랜드와 모델이 모두 있어야 하고, 나머지는 주 설명이 비어 있지 않아야 한다.
    pub fn can_save(&self) -> bool {
        match self {
            ComponentSpec::PlcCard { brand, model, .. } => {
                !brand.trim().is_empty() && !model.trim().is_empty()
            }
            other => !other.primary_description().trim().is_empty(),
        }
    }
}

/// 저장할 수 없는 초안.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// 분류별 필수 항목이 비어 있음
    UnsaveableDraft { category: ComponentCategory },
}

impl std::fmt::Display for DraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftError::UnsaveableDraft { category } => {
                write!(f, "required fields missing for {}", category.title())
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// 아직 저장되지 않은 부품 입력 상태.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDraft {
    pub spec: ComponentSpec,
    pub tag: String,
    quantity: u32,
    pub additional_info: String,
}

impl Default for ComponentDraft {
    fn default() -> Self {
        Self {
            spec: ComponentSpec::default(),
            tag: String::new(),
            quantity: QUANTITY_MIN,
            additional_info: String::new(),
        }
    }
}

impl ComponentDraft {
    pub fn new(category: ComponentCategory) -> Self {
        Self {
            spec: ComponentSpec::default_for(category),
            ..Self::default()
        }
    }

    pub fn category(&self) -> ComponentCategory {
        self.spec.category()
    }

    /// 분류를 바꾼다. 다른 분류로 바뀌면 분류별 입력은 기본값으로 초기화된다.
    pub fn set_category(&mut self, category: ComponentCategory) {
        if self.spec.category() != category {
            self.spec = ComponentSpec::default_for(category);
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// 수량은 1~500으로 제한한다.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.clamp(QUANTITY_MIN, QUANTITY_MAX);
    }

    pub fn can_save(&self) -> bool {
        self.spec.can_save()
    }

    /// 초안에서 부품을 만든다. 필수 항목이 비어 있으면 `UnsaveableDraft`.
    pub fn build(&self) -> Result<Component, DraftError> {
        if !self.can_save() {
            return Err(DraftError::UnsaveableDraft {
                category: self.category(),
            });
        }
        let tag = self.tag.trim();
        Ok(Component {
            id: Uuid::new_v4(),
            name: self.spec.display_name(),
            category: self.category(),
            tag: (!tag.is_empty()).then(|| tag.to_string()),
            primary: self.spec.primary_description(),
            secondary: self.spec.secondary_description(),
            details: self.additional_info.trim().to_string(),
            quantity: self.quantity,
            acquired: false,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// 새 프로젝트 입력 폼 상태. 저장 전 부품 목록을 함께 들고 있다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub voltage: String,
    pub notes: String,
    pub components: Vec<Component>,
    pub component_draft: ComponentDraft,
}

impl ProjectDraft {
    /// 현재 부품 초안을 대기 목록에 추가한다. 저장할 수 없으면 아무것도 하지 않는다.
    pub fn commit_component(&mut self) -> Option<Uuid> {
        let component = self.component_draft.build().ok()?;
        let id = component.id;
        self.components.push(component);
        self.component_draft.reset();
        Some(id)
    }

    /// 이름만으로 사용자 정의 항목을 추가한다.
    pub fn add_custom_item(&mut self, name: &str) -> Option<Uuid> {
        let component = Component::custom(name)?;
        let id = component.id;
        self.components.push(component);
        Some(id)
    }

    pub fn remove_pending(&mut self, id: Uuid) {
        self.components.retain(|c| c.id != id);
    }

    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
