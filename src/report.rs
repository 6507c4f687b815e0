//! 계산 결과를 사용자 언어의 문장으로 바꾼다. CLI와 GUI가 같이 쓴다.

use crate::calculators::{CalcError, PowerEstimate, VoltageDropEstimate, WattEstimate};
use crate::i18n::{keys, Translator};
use crate::reference;

/// 옴의 법칙 결과 4줄. `values`는 V, I, R, P 순서의 표시 문자열.
pub fn ohms_lines(tr: &Translator, values: &[String; 4]) -> Vec<String> {
    [
        keys::OHMS_RESULT_VOLTAGE,
        keys::OHMS_RESULT_CURRENT,
        keys::OHMS_RESULT_RESISTANCE,
        keys::OHMS_RESULT_POWER,
    ]
    .iter()
    .zip(values)
    .map(|(key, value)| tr.tf(key, &[("value", value.clone())]))
    .collect()
}

pub fn power_lines(tr: &Translator, estimate: &PowerEstimate) -> Vec<String> {
    vec![
        tr.tf(
            keys::POWER_RESULT_POWER,
            &[
                ("watts", format!("{:.2}", estimate.real_power_w)),
                ("kw", format!("{:.3}", estimate.kilowatts)),
            ],
        ),
        tr.tf(
            keys::POWER_RESULT_BREAKER,
            &[("amps", format!("{:.2}", estimate.recommended_breaker_a))],
        ),
        tr.tf(
            keys::POWER_RESULT_APPARENT,
            &[("va", format!("{:.2}", estimate.apparent_power_va))],
        ),
    ]
}

pub fn watt_lines(tr: &Translator, estimate: &WattEstimate) -> Vec<String> {
    vec![
        tr.tf(
            keys::WATT_RESULT_REAL,
            &[
                ("watts", format!("{:.2}", estimate.watts)),
                ("kw", format!("{:.3}", estimate.kilowatts)),
            ],
        ),
        tr.tf(
            keys::WATT_RESULT_PF,
            &[("pf", format!("{:.2}", estimate.power_factor))],
        ),
    ]
}

pub fn drop_lines(tr: &Translator, estimate: &VoltageDropEstimate) -> Vec<String> {
    vec![
        tr.tf(
            keys::DROP_RESULT_VOLTAGE,
            &[("volts", format!("{:.2}", estimate.drop_v))],
        ),
        tr.tf(
            keys::DROP_RESULT_PERCENT,
            &[("percent", format!("{:.2}", estimate.percent_drop))],
        ),
        tr.tf(
            keys::DROP_RESULT_RESISTANCE,
            &[("ohms", format!("{:.3}", estimate.resistance_ohm))],
        ),
    ]
}

/// 계산 오류를 안내 문구로 바꾼다.
/// 숫자 해석 실패는 계산기마다 다른 `validation_key` 문구를 쓴다.
pub fn calc_error_message(tr: &Translator, err: &CalcError, validation_key: &str) -> String {
    match err {
        CalcError::InsufficientInputs { .. } => tr.t(keys::OHMS_VALIDATION).to_string(),
        CalcError::InvalidNumericInput { .. } => tr.t(validation_key).to_string(),
    }
}

/// 참고 상수 줄들. 단위가 없는 값은 숫자만 보인다.
pub fn reference_constant_lines(tr: &Translator) -> Vec<String> {
    reference::sheet()
        .constants
        .iter()
        .map(|c| {
            if c.unit.is_empty() {
                format!("{}: {}", tr.t(c.key), c.value)
            } else {
                format!("{}: {} {}", tr.t(c.key), c.value, c.unit)
            }
        })
        .collect()
}

pub fn reference_tip_lines(tr: &Translator) -> Vec<String> {
    reference::sheet()
        .tips
        .iter()
        .map(|key| tr.t(key).to_string())
        .collect()
}
