use crate::formula::{FormulaId, FormulaRegistry};
use crate::normalize::NormalizedInputs;
use crate::prefix::PrefixTable;
use crate::telecom::{capacity, noise, spectrum, DomainError};

/// 평가 단계 오류.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// 등록되지 않은 공식 키
    UnknownFormula(String),
    /// 공식이 선언한 필드가 입력 맵에 없음
    MissingField { formula: &'static str, field: &'static str },
    /// 공식별 도메인 위반
    Domain(DomainError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::UnknownFormula(key) => write!(f, "등록되지 않은 공식: {key}"),
            EvalError::MissingField { formula, field } => {
                write!(f, "공식 '{formula}'에 필요한 필드 '{field}'가 없습니다.")
            }
            EvalError::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<DomainError> for EvalError {
    fn from(value: DomainError) -> Self {
        EvalError::Domain(value)
    }
}

/// 한 번의 평가 결과. value는 SI 수치, display는 사람이 읽는 문자열.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub value: f64,
    pub unit: &'static str,
    pub display: String,
}

fn require(id: FormulaId, inputs: &NormalizedInputs, name: &'static str) -> Result<f64, EvalError> {
    inputs
        .get(name)
        .copied()
        .ok_or(EvalError::MissingField { formula: id.key(), field: name })
}

impl FormulaId {
    /// 공식별 닫힌형 계산. 곡선 생성기와 같은 telecom 모듈 함수를 쓰므로
    /// 두 경로의 수치가 어긋날 수 없다.
    pub fn evaluate(&self, inputs: &NormalizedInputs) -> Result<f64, EvalError> {
        match self {
            FormulaId::Bandwidth => {
                let f_max = require(*self, inputs, "Fmax")?;
                let f_min = require(*self, inputs, "Fmin")?;
                Ok(spectrum::occupied_bandwidth(f_max, f_min)?)
            }
            FormulaId::Shannon => {
                let b = require(*self, inputs, "B")?;
                let snr = require(*self, inputs, "SNR")?;
                Ok(capacity::shannon_capacity(b, snr)?)
            }
            FormulaId::NoisePower => {
                let t = require(*self, inputs, "T")?;
                let b = require(*self, inputs, "B")?;
                Ok(noise::thermal_noise_power(t, b)?)
            }
            FormulaId::NoiseVoltage => {
                let r = require(*self, inputs, "R")?;
                let t = require(*self, inputs, "T")?;
                let b = require(*self, inputs, "B")?;
                Ok(noise::thermal_noise_voltage(r, t, b)?)
            }
            FormulaId::NoiseFactor => {
                let nf = require(*self, inputs, "NF")?;
                Ok(noise::noise_factor_from_figure(nf))
            }
            FormulaId::NoiseFigure => {
                let factor = require(*self, inputs, "F")?;
                Ok(noise::noise_figure_from_factor(factor)?)
            }
        }
    }
}

/// 공식 키와 SI 입력 맵으로 스칼라 결과를 계산한다. 순수 함수이며 같은
/// 인자로 부르면 비트 단위로 같은 값을 돌려준다.
pub fn evaluate(
    registry: &FormulaRegistry,
    prefixes: &PrefixTable,
    formula_key: &str,
    inputs: &NormalizedInputs,
) -> Result<CalculationResult, EvalError> {
    let formula = registry
        .get_by_key(formula_key)
        .ok_or_else(|| EvalError::UnknownFormula(formula_key.to_string()))?;
    let value = formula.id.evaluate(inputs)?;
    let unit = formula.id.result_unit();
    let display = format_result(prefixes, value, unit);
    Ok(CalculationResult { value, unit, display })
}

/// 값을 "기본 표기 | 접두어 표기 | 지수 표기" 세 형태로 묶어 표시 문자열을
/// 만든다. 로케일에 의존하지 않으며 같은 입력에는 항상 같은 문자열이다.
pub fn format_result(prefixes: &PrefixTable, value: f64, unit: &str) -> String {
    if value == 0.0 {
        return format!("0 {unit}   |   0 {unit}   |   0 {unit}");
    }
    let normal = format!("{value:.6} {unit}");
    let prefixed = match prefixes.scale_for_display(value) {
        Some((scaled, symbol)) => format!("{scaled:.3} {symbol}{unit}"),
        None => format!("{value:.6} {unit}"),
    };
    let sci_raw = format!("{value:.6e}");
    let sci = match sci_raw.split_once('e') {
        Some((mantissa, exp)) => format!("{mantissa} × 10^{exp} {unit}"),
        None => format!("{sci_raw} {unit}"),
    };
    format!("{normal}   |   {prefixed}   |   {sci}")
}
