use super::DomainError;

/// 섀넌 채널 용량 C = B · log₂(1 + SNR) [bits/s].
///
/// SNR은 선형 전력비로 받는다.
pub fn shannon_capacity(bandwidth_hz: f64, snr_linear: f64) -> Result<f64, DomainError> {
    if bandwidth_hz <= 0.0 {
        return Err(DomainError("대역폭은 0보다 커야 합니다."));
    }
    let arg = 1.0 + snr_linear;
    if arg <= 0.0 {
        return Err(DomainError("로그 인자가 0 이하입니다. SNR 값을 확인하세요."));
    }
    Ok(bandwidth_hz * arg.log2())
}

/// dB 단위 SNR을 선형 전력비로 환산한다.
pub fn snr_db_to_linear(snr_db: f64) -> f64 {
    10f64.powf(snr_db / 10.0)
}
