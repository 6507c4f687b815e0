use super::CalcError;
use crate::quantity::{format_value, parse_number, round_to_places, QuantityKind};

/// 결과 표시용 소수점 자리수.
pub const OHMS_DISPLAY_PLACES: u32 = 3;

/// 옴의 법칙 입력. 4개 중 최소 2개가 채워져야 한다.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElectricalQuantitySet {
    pub voltage: Option<f64>,
    pub current: Option<f64>,
    pub resistance: Option<f64>,
    pub power: Option<f64>,
}

impl ElectricalQuantitySet {
    /// 텍스트 필드 4개를 각각 해석한다. 비었거나 숫자가 아니면 해당 값은 없는 것으로 본다.
    pub fn from_text(voltage: &str, current: &str, resistance: &str, power: &str) -> Self {
        Self {
            voltage: parse_number(voltage),
            current: parse_number(current),
            resistance: parse_number(resistance),
            power: parse_number(power),
        }
    }

    /// 채워진 값의 개수.
    pub fn known_count(&self) -> usize {
        [self.voltage, self.current, self.resistance, self.power]
            .iter()
            .filter(|v| v.is_some())
            .count()
    }
}

/// 4개 값이 모두 채워진 풀이 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OhmsLawSolution {
    pub voltage: f64,
    pub current: f64,
    pub resistance: f64,
    pub power: f64,
}

impl OhmsLawSolution {
    /// 모든 값을 `places` 자리로 반올림한 사본.
    pub fn rounded(&self, places: u32) -> Self {
        Self {
            voltage: round_to_places(self.voltage, places),
            current: round_to_places(self.current, places),
            resistance: round_to_places(self.resistance, places),
            power: round_to_places(self.power, places),
        }
    }

    /// V, I, R, P 순서의 표시 문자열 (소수점 3자리).
    pub fn formatted(&self) -> [String; 4] {
        format_quantity_set(&self.as_set())
    }

    pub fn as_set(&self) -> ElectricalQuantitySet {
        ElectricalQuantitySet {
            voltage: Some(self.voltage),
            current: Some(self.current),
            resistance: Some(self.resistance),
            power: Some(self.power),
        }
    }
}

/// V, I, R, P 순서로 값을 표시한다. 없는 값은 자리표시자.
pub fn format_quantity_set(set: &ElectricalQuantitySet) -> [String; 4] {
    [
        format_value(set.voltage, QuantityKind::Voltage, OHMS_DISPLAY_PLACES),
        format_value(set.current, QuantityKind::Current, OHMS_DISPLAY_PLACES),
        format_value(set.resistance, QuantityKind::Resistance, OHMS_DISPLAY_PLACES),
        format_value(set.power, QuantityKind::Power, OHMS_DISPLAY_PLACES),
    ]
}

/// 주어진 두 값에서 나머지 두 값을 구한다.
///
/// 우선순위: (V,I) → (V,R) → (V,P) → (I,R) → (I,P) → (R,P). 처음 일치한 쌍만 사용하고
/// 나머지 입력은 계산값으로 덮어쓴다. 0으로 나누기는 검사하지 않으므로 결과가
/// 무한대/NaN이 될 수 있다.
pub fn solve(input: &ElectricalQuantitySet) -> Result<OhmsLawSolution, CalcError> {
    let provided = input.known_count();
    if provided < 2 {
        return Err(CalcError::InsufficientInputs { provided });
    }

    let solution = match (input.voltage, input.current, input.resistance, input.power) {
        (Some(v), Some(i), _, _) => OhmsLawSolution {
            voltage: v,
            current: i,
            resistance: v / i,
            power: v * i,
        },
        (Some(v), None, Some(r), _) => {
            let i = v / r;
            OhmsLawSolution {
                voltage: v,
                current: i,
                resistance: r,
                power: v * i,
            }
        }
        (Some(v), None, None, Some(p)) => {
            let i = p / v;
            OhmsLawSolution {
                voltage: v,
                current: i,
                resistance: v / i,
                power: p,
            }
        }
        (None, Some(i), Some(r), _) => OhmsLawSolution {
            voltage: i * r,
            current: i,
            resistance: r,
            power: i.powi(2) * r,
        },
        (None, Some(i), None, Some(p)) => {
            let v = p / i;
            OhmsLawSolution {
                voltage: v,
                current: i,
                resistance: v / i,
                power: p,
            }
        }
        (None, None, Some(r), Some(p)) => {
            let i = (p / r).sqrt();
            OhmsLawSolution {
                voltage: i * r,
                current: i,
                resistance: r,
                power: p,
            }
        }
        _ => return Err(CalcError::InsufficientInputs { provided }),
    };
    Ok(solution)
}
