use super::DomainError;

/// 점유 대역폭 B = Fmax − Fmin [Hz]. 결과가 0 이하이면 도메인 오류.
pub fn occupied_bandwidth(f_max_hz: f64, f_min_hz: f64) -> Result<f64, DomainError> {
    let bandwidth = f_max_hz - f_min_hz;
    if bandwidth <= 0.0 {
        return Err(DomainError("최대 주파수는 최소 주파수보다 커야 합니다."));
    }
    Ok(bandwidth)
}
