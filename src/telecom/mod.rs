//! 통신 공학 공식 모음.

pub mod capacity;
pub mod noise;
pub mod spectrum;

/// 볼츠만 상수 [J/K]. 평가기와 곡선 생성기가 같은 값을 공유한다.
pub const BOLTZMANN: f64 = 1.380649e-23;

/// 수치로는 유효하지만 물리적/수학적으로 허용되지 않는 입력 조합 오류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainError(pub &'static str);

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for DomainError {}
