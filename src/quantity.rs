/// 다루는 전기량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Voltage,
    Current,
    Resistance,
    Power,
    ApparentPower,
    Length,
    Area,
    Percent,
}

impl QuantityKind {
    /// 결과 문자열에 붙는 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            QuantityKind::Voltage => "V",
            QuantityKind::Current => "A",
            QuantityKind::Resistance => "Ω",
            QuantityKind::Power => "W",
            QuantityKind::ApparentPower => "VA",
            QuantityKind::Length => "m",
            QuantityKind::Area => "mm²",
            QuantityKind::Percent => "%",
        }
    }
}

/// 값이 없을 때 표시하는 자리표시자.
pub const PLACEHOLDER: &str = "–";

/// 소수점 `places` 자리에서 반올림한다. NaN/무한대는 그대로 통과한다.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let divisor = 10_f64.powi(places as i32);
    (value * divisor).round() / divisor
}

/// 반올림한 값과 단위를 붙여 표시 문자열을 만든다. 값이 없으면 자리표시자를 쓴다.
///
/// 정수 값도 소수점 한 자리는 남긴다 (`23.0 Ω`, `0.435 A`).
pub fn format_value(value: Option<f64>, kind: QuantityKind, places: u32) -> String {
    match value {
        Some(v) => format!("{} {}", format_number(round_to_places(v, places)), kind.symbol()),
        None => PLACEHOLDER.to_string(),
    }
}

fn format_number(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        v.to_string()
    }
}

/// 텍스트 입력을 숫자로 해석한다. 앞뒤 공백은 무시하고, 비어 있거나 숫자가 아니면 None.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
