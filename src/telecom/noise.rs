use super::{DomainError, BOLTZMANN};

/// 열잡음 전력 N = k · T · B [W].
pub fn thermal_noise_power(temperature_k: f64, bandwidth_hz: f64) -> Result<f64, DomainError> {
    if temperature_k < 0.0 {
        return Err(DomainError("온도는 0 K 이상이어야 합니다."));
    }
    if bandwidth_hz <= 0.0 {
        return Err(DomainError("대역폭은 0보다 커야 합니다."));
    }
    Ok(BOLTZMANN * temperature_k * bandwidth_hz)
}

/// 열잡음 전압 Vn = √(4 · k · R · T · B) [V].
pub fn thermal_noise_voltage(
    resistance_ohm: f64,
    temperature_k: f64,
    bandwidth_hz: f64,
) -> Result<f64, DomainError> {
    if resistance_ohm < 0.0 {
        return Err(DomainError("저항은 0 이상이어야 합니다."));
    }
    if temperature_k < 0.0 {
        return Err(DomainError("온도는 0 K 이상이어야 합니다."));
    }
    if bandwidth_hz <= 0.0 {
        return Err(DomainError("대역폭은 0보다 커야 합니다."));
    }
    Ok((4.0 * BOLTZMANN * resistance_ohm * temperature_k * bandwidth_hz).sqrt())
}

/// 잡음 지수 NF(dB)를 선형 잡음 인자 F = 10^(NF/10)로 환산한다.
pub fn noise_factor_from_figure(figure_db: f64) -> f64 {
    10f64.powf(figure_db / 10.0)
}

/// 선형 잡음 인자 F를 잡음 지수 NF = 10 · log₁₀(F) [dB]로 환산한다.
pub fn noise_figure_from_factor(factor: f64) -> Result<f64, DomainError> {
    if factor <= 0.0 {
        return Err(DomainError("잡음 인자는 0보다 커야 합니다."));
    }
    Ok(10.0 * factor.log10())
}
