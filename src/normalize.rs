use std::collections::BTreeMap;

use crate::formula::Formula;
use crate::prefix::PrefixTable;

/// 필드 이름을 키로 하는 SI 값 맵. 평가기와 곡선 생성기가 공유하는 입력 형태.
pub type NormalizedInputs = BTreeMap<String, f64>;

/// 입력 정규화 오류. 어떤 필드에서 났는지 항상 함께 담아 필드 단위
/// 메시지를 만들 수 있게 한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// 공백 제거 후 값이 비어 있음
    EmptyValue { field: String },
    /// 유한한 십진수로 해석할 수 없음 (NaN/inf 리터럴 포함)
    InvalidNumber { field: String, raw: String },
    /// 표에 없는 접두어 기호. 부트스트랩 구성 오류이며 사용자 입력이 아니다.
    UnknownPrefix { field: String, symbol: String },
}

impl std::fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::EmptyValue { field } => {
                write!(f, "'{field}' 값이 비어 있습니다.")
            }
            NormalizeError::InvalidNumber { field, raw } => {
                write!(f, "'{field}' 값이 올바른 숫자가 아닙니다: {raw}")
            }
            NormalizeError::UnknownPrefix { field, symbol } => {
                write!(f, "'{field}'에 알 수 없는 접두어: {symbol}")
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// 원시 문자열 + 접두어 기호를 SI 값으로 정규화한다.
///
/// 지수 표기와 앞뒤 공백은 허용하고, 비어 있거나 유한수가 아니면 실패한다.
/// 순수 함수이며 재시도하지 않는다.
pub fn normalize(
    table: &PrefixTable,
    field: &str,
    raw: &str,
    prefix_symbol: &str,
) -> Result<f64, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::EmptyValue { field: field.to_string() });
    }
    let magnitude: f64 = trimmed.parse().map_err(|_| NormalizeError::InvalidNumber {
        field: field.to_string(),
        raw: trimmed.to_string(),
    })?;
    // parse는 "NaN"/"inf" 리터럴과 오버플로 무한대도 통과시키므로 직접 거른다.
    if !magnitude.is_finite() {
        return Err(NormalizeError::InvalidNumber {
            field: field.to_string(),
            raw: trimmed.to_string(),
        });
    }
    let entry = table.lookup(prefix_symbol).ok_or_else(|| NormalizeError::UnknownPrefix {
        field: field.to_string(),
        symbol: prefix_symbol.to_string(),
    })?;
    Ok(magnitude * entry.factor)
}

/// 공식이 선언한 필드 순서대로 (원시값, 접두어) 쌍을 정규화해 입력 맵을
/// 조립한다. 쌍이 모자라면 해당 필드의 EmptyValue로 처리한다.
pub fn normalize_inputs(
    table: &PrefixTable,
    formula: &Formula,
    raw_pairs: &[(String, String)],
) -> Result<NormalizedInputs, NormalizeError> {
    let mut inputs = NormalizedInputs::new();
    for (i, field) in formula.fields.iter().enumerate() {
        let (raw, symbol) = match raw_pairs.get(i) {
            Some((raw, symbol)) => (raw.as_str(), symbol.as_str()),
            None => ("", ""),
        };
        let value = normalize(table, field.name, raw, symbol)?;
        inputs.insert(field.name.to_string(), value);
    }
    Ok(inputs)
}
