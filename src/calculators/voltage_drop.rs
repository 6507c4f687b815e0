use super::{required_number, CalcError};

/// 구리 저항률 [Ω·mm²/m], 20°C 기준. 변경하지 않는다.
pub const COPPER_RESISTIVITY: f64 = 0.0175;
/// 도체 단면적 슬라이더 범위 [mm²].
pub const CONDUCTOR_AREA_MIN: f64 = 1.5;
pub const CONDUCTOR_AREA_MAX: f64 = 35.0;
pub const CONDUCTOR_AREA_STEP: f64 = 0.5;
pub const DEFAULT_CONDUCTOR_AREA: f64 = 2.5;

/// 전압강하 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorRun {
    /// 편도 길이 [m]
    pub length_m: f64,
    /// 부하 전류 [A]
    pub load_current_a: f64,
    /// 도체 단면적 [mm²], UI에서 1.5~35로 제한
    pub conductor_area_mm2: f64,
    /// 공급 전압 [V]
    pub supply_voltage_v: f64,
}

/// 전압강하 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageDropEstimate {
    /// 왕복 길이 [m]
    pub round_trip_length_m: f64,
    /// 루프 저항 [Ω]
    pub resistance_ohm: f64,
    /// 전압강하 [V]
    pub drop_v: f64,
    /// 전압강하율 [%]
    pub percent_drop: f64,
}

/// 왕복 길이 기준 루프 저항과 전압강하를 구한다.
pub fn estimate_voltage_drop(run: &ConductorRun) -> VoltageDropEstimate {
    let round_trip = run.length_m * 2.0;
    let resistance = (COPPER_RESISTIVITY * round_trip) / run.conductor_area_mm2;
    let drop = run.load_current_a * resistance;
    VoltageDropEstimate {
        round_trip_length_m: round_trip,
        resistance_ohm: resistance,
        drop_v: drop,
        percent_drop: drop / run.supply_voltage_v * 100.0,
    }
}

/// 텍스트 입력 버전. 길이/전류/공급전압 중 하나라도 해석할 수 없으면 `InvalidNumericInput`.
pub fn estimate_voltage_drop_from_text(
    length_m: &str,
    load_current_a: &str,
    supply_voltage_v: &str,
    conductor_area_mm2: f64,
) -> Result<VoltageDropEstimate, CalcError> {
    let run = ConductorRun {
        length_m: required_number(length_m, "length")?,
        load_current_a: required_number(load_current_a, "load current")?,
        conductor_area_mm2,
        supply_voltage_v: required_number(supply_voltage_v, "supply voltage")?,
    };
    Ok(estimate_voltage_drop(&run))
}
