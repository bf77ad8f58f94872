use crate::formula::FormulaId;
use crate::normalize::NormalizedInputs;
use crate::telecom::{capacity, noise, spectrum};

/// 플롯용 (x, y) 점열. 생성 후 변경하지 않으며, UI는 한 번에 하나의 활성
/// 시리즈만 유지하고 새 플롯이 이전 것을 통째로 대체한다.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub points: Vec<(f64, f64)>,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

/// 곡선 생성 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// 스윕 정책이 없는 공식 키
    UnsupportedForPlotting(String),
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::UnsupportedForPlotting(key) => {
                write!(f, "플롯을 지원하지 않는 공식: {key}")
            }
        }
    }
}

impl std::error::Error for CurveError {}

/// 스윕 기본값. 입력이 없거나 도메인을 벗어난 고정 필드는 이 값으로 대체한다.
pub const DEFAULT_TEMPERATURE_K: f64 = 290.0;
pub const DEFAULT_RESISTANCE_OHM: f64 = 50.0;
pub const DEFAULT_BANDWIDTH_HZ: f64 = 1e6;
/// 섀넌 곡선의 기본 대역폭. 원 교재 프런트엔드와 같은 1 Hz.
pub const DEFAULT_SHANNON_BANDWIDTH_HZ: f64 = 1.0;
/// 대역폭 스윕에서 고정하는 최소 주파수.
const SWEEP_FMIN_HZ: f64 = 1e6;

/// 입력 맵에서 양수 값을 꺼내고, 없거나 0 이하이면 기본값을 쓴다.
fn positive_or(inputs: &NormalizedInputs, name: &str, default: f64) -> f64 {
    match inputs.get(name) {
        Some(&v) if v > 0.0 => v,
        _ => default,
    }
}

/// 입력 맵에서 0 이상 값을 꺼내고, 없거나 음수이면 기본값을 쓴다.
fn non_negative_or(inputs: &NormalizedInputs, name: &str, default: f64) -> f64 {
    match inputs.get(name) {
        Some(&v) if v >= 0.0 => v,
        _ => default,
    }
}

impl FormulaId {
    /// 공식별 고정 스윕 정책으로 점열을 만든다. 결정적이며, 종속값은
    /// 평가기와 같은 telecom 함수로 계산한다. 고정 입력은 기본값 대체로
    /// 도메인을 만족시킨 뒤라 실패 분기는 도달하지 않는다.
    pub fn sweep(&self, inputs: &NormalizedInputs) -> Series {
        match self {
            FormulaId::Shannon => {
                let b = positive_or(inputs, "B", DEFAULT_SHANNON_BANDWIDTH_HZ);
                let points = (0..41)
                    .map(|i| {
                        let snr_db = -10.0 + i as f64;
                        let snr = capacity::snr_db_to_linear(snr_db);
                        let c = capacity::shannon_capacity(b, snr).unwrap_or(f64::NAN);
                        (snr_db, c)
                    })
                    .collect();
                Series { points, x_label: "SNR (dB)", y_label: "Capacity (bits/s)" }
            }
            FormulaId::NoisePower => {
                let t = non_negative_or(inputs, "T", DEFAULT_TEMPERATURE_K);
                let points = (0..50)
                    .map(|i| {
                        let b = (i + 1) as f64 * 1e3;
                        let n = noise::thermal_noise_power(t, b).unwrap_or(f64::NAN);
                        (b, n)
                    })
                    .collect();
                Series { points, x_label: "B (Hz)", y_label: "Noise power (W)" }
            }
            FormulaId::NoiseVoltage => {
                let r = non_negative_or(inputs, "R", DEFAULT_RESISTANCE_OHM);
                let b = positive_or(inputs, "B", DEFAULT_BANDWIDTH_HZ);
                let points = (0..50)
                    .map(|i| {
                        let t = 200.0 + i as f64 * 10.0;
                        let vn = noise::thermal_noise_voltage(r, t, b).unwrap_or(f64::NAN);
                        (t, vn)
                    })
                    .collect();
                Series { points, x_label: "T (K)", y_label: "Noise voltage (V)" }
            }
            FormulaId::NoiseFactor | FormulaId::NoiseFigure => {
                let points = (0..50)
                    .map(|i| {
                        let factor = 1.0 + i as f64 * 0.1;
                        let nf = noise::noise_figure_from_factor(factor).unwrap_or(f64::NAN);
                        (factor, nf)
                    })
                    .collect();
                Series { points, x_label: "F (adim)", y_label: "NF (dB)" }
            }
            FormulaId::Bandwidth => {
                // 첫 점은 Fmax == Fmin이라 0 Hz를 그대로 그린다.
                let points = (0..50)
                    .map(|i| {
                        let f_max = (i + 1) as f64 * 1e6;
                        let b = spectrum::occupied_bandwidth(f_max, SWEEP_FMIN_HZ).unwrap_or(0.0);
                        (f_max, b)
                    })
                    .collect();
                Series { points, x_label: "Fmax (Hz)", y_label: "B (Hz)" }
            }
        }
    }
}

/// 공식 키로 일러스트용 곡선 데이터를 만든다. 평가기와 달리 빠진 입력은
/// 기본값으로 관대하게 대체하지만, 모르는 키는 실패로 처리한다.
pub fn generate(formula_key: &str, inputs: &NormalizedInputs) -> Result<Series, CurveError> {
    let id = FormulaId::from_key(formula_key)
        .ok_or_else(|| CurveError::UnsupportedForPlotting(formula_key.to_string()))?;
    Ok(id.sweep(inputs))
}
