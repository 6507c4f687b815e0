//! 전기 계산기 모듈 모음.
//! 옴의 법칙, 단상/3상 전력, 전압강하 계산으로 구성한다.

pub mod ohms_law;
pub mod power;
pub mod voltage_drop;

pub use ohms_law::*;
pub use power::*;
pub use voltage_drop::*;

use crate::quantity::parse_number;

/// 계산 입력 검증 단계에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// 옴의 법칙: 알려진 값이 2개 미만
    InsufficientInputs { provided: usize },
    /// 필수 숫자 필드를 해석할 수 없음
    InvalidNumericInput { field: &'static str },
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::InsufficientInputs { provided } => {
                write!(f, "at least two values are required ({provided} given)")
            }
            CalcError::InvalidNumericInput { field } => {
                write!(f, "not a number: {field}")
            }
        }
    }
}

impl std::error::Error for CalcError {}

/// 필수 숫자 필드를 읽는다. 해석할 수 없으면 `InvalidNumericInput`.
pub(crate) fn required_number(text: &str, field: &'static str) -> Result<f64, CalcError> {
    parse_number(text).ok_or(CalcError::InvalidNumericInput { field })
}
