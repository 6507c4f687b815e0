/// 현장 참고용 상수표와 사용 팁.
/// 값은 계산기 모듈에서 쓰는 상수와 같다.
use crate::calculators::{COPPER_RESISTIVITY, POWER_FACTOR_MAX, POWER_FACTOR_MIN};
use crate::i18n::keys;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceConstant {
    pub key: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

#[derive(Debug)]
pub struct ReferenceSheet {
    pub constants: &'static [ReferenceConstant],
    pub tips: &'static [&'static str],
}

const CONSTANTS: &[ReferenceConstant] = &[
    ReferenceConstant {
        key: keys::REFERENCE_COPPER,
        value: COPPER_RESISTIVITY,
        unit: "Ω·mm²/m",
    },
    ReferenceConstant {
        key: keys::REFERENCE_PF_MIN,
        value: POWER_FACTOR_MIN,
        unit: "",
    },
    ReferenceConstant {
        key: keys::REFERENCE_PF_MAX,
        value: POWER_FACTOR_MAX,
        unit: "",
    },
    ReferenceConstant {
        key: keys::REFERENCE_MULTIPLIER,
        value: 1.732,
        unit: "",
    },
];

const TIPS: &[&str] = &[
    keys::REFERENCE_TIP_OHMS,
    keys::REFERENCE_TIP_BREAKER,
    keys::REFERENCE_TIP_DROP,
];

static SHEET: ReferenceSheet = ReferenceSheet {
    constants: CONSTANTS,
    tips: TIPS,
};

pub fn sheet() -> &'static ReferenceSheet {
    &SHEET
}

pub fn find_constant(key: &str) -> Option<&'static ReferenceConstant> {
    CONSTANTS.iter().find(|c| c.key == key)
}
