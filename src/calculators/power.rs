use serde::{Deserialize, Serialize};

use super::{required_number, CalcError};
use crate::quantity::round_to_places;

/// 역률 슬라이더 하한.
pub const POWER_FACTOR_MIN: f64 = 0.5;
/// 역률 슬라이더 상한.
pub const POWER_FACTOR_MAX: f64 = 1.0;
/// 역률 슬라이더 간격.
pub const POWER_FACTOR_STEP: f64 = 0.01;
/// 전력 추정기 기본 역률.
pub const DEFAULT_POWER_FACTOR: f64 = 0.95;
/// 차단기 권장 정격 = 부하전류 × 125%.
pub const BREAKER_SAFETY_FACTOR: f64 = 1.25;

/// 상 구성.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Single,
    Three,
}

impl Phase {
    /// 단상 1.0, 3상 √3.
    pub fn multiplier(&self) -> f64 {
        match self {
            Phase::Single => 1.0,
            Phase::Three => 3_f64.sqrt(),
        }
    }
}

/// 전력 추정 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseConfig {
    pub phase: Phase,
    pub voltage: f64,
    pub current: f64,
    /// 0.5~1.0 범위는 UI에서 보장한다. 계산기는 값을 그대로 쓴다.
    pub power_factor: f64,
}

/// 전력 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerEstimate {
    pub multiplier: f64,
    /// 유효전력 [W]
    pub real_power_w: f64,
    /// 유효전력 [kW]
    pub kilowatts: f64,
    /// 피상전력 [VA]
    pub apparent_power_va: f64,
    /// 권장 차단기 정격 [A], 소수점 2자리 반올림
    pub recommended_breaker_a: f64,
}

/// 슬라이더 범위로 역률을 제한한다. UI 쪽 헬퍼.
pub fn clamp_power_factor(pf: f64) -> f64 {
    pf.clamp(POWER_FACTOR_MIN, POWER_FACTOR_MAX)
}

/// 권장 차단기 정격: round(I × 1.25, 2).
pub fn recommended_breaker(current: f64) -> f64 {
    round_to_places(current * BREAKER_SAFETY_FACTOR, 2)
}

/// 상 구성, 전압, 전류, 역률로 유효/피상 전력과 권장 차단기를 계산한다.
/// 음수나 0 입력도 검사 없이 그대로 계산한다.
pub fn estimate_power(input: &PhaseConfig) -> PowerEstimate {
    let multiplier = input.phase.multiplier();
    let apparent = multiplier * input.voltage * input.current;
    let real = apparent * input.power_factor;
    PowerEstimate {
        multiplier,
        real_power_w: real,
        kilowatts: real / 1000.0,
        apparent_power_va: apparent,
        recommended_breaker_a: recommended_breaker(input.current),
    }
}

/// 텍스트 입력 버전. 전압/전류를 해석할 수 없으면 `InvalidNumericInput`.
pub fn estimate_power_from_text(
    voltage: &str,
    current: &str,
    phase: Phase,
    power_factor: f64,
) -> Result<PowerEstimate, CalcError> {
    let voltage = required_number(voltage, "voltage")?;
    let current = required_number(current, "current")?;
    Ok(estimate_power(&PhaseConfig {
        phase,
        voltage,
        current,
        power_factor,
    }))
}

/// 와트 계산 결과 (단상 고정).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WattEstimate {
    pub watts: f64,
    pub kilowatts: f64,
    pub power_factor: f64,
}

/// W = V × I × PF.
pub fn compute_watts(voltage: f64, current: f64, power_factor: f64) -> WattEstimate {
    let watts = voltage * current * power_factor;
    WattEstimate {
        watts,
        kilowatts: watts / 1000.0,
        power_factor,
    }
}

pub fn compute_watts_from_text(
    voltage: &str,
    current: &str,
    power_factor: f64,
) -> Result<WattEstimate, CalcError> {
    let voltage = required_number(voltage, "voltage")?;
    let current = required_number(current, "current")?;
    Ok(compute_watts(voltage, current, power_factor))
}
