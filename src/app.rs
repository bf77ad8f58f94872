use crate::config::Config;
use crate::curve;
use crate::evaluate;
use crate::formula::{self, FormulaRegistry};
use crate::i18n::{self, Translator};
use crate::normalize;
use crate::prefix::PrefixTable;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 공식 카탈로그 등록 오류
    Registry(formula::RegistryError),
    /// 입력 정규화 오류
    Normalize(normalize::NormalizeError),
    /// 공식 평가 오류
    Eval(evaluate::EvalError),
    /// 곡선 생성 오류
    Curve(curve::CurveError),
    /// 부트스트랩 구성 오류 (예: 설정된 기본 접두어가 표에 없음)
    Bootstrap(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Registry(e) => write!(f, "공식 카탈로그 오류: {e}"),
            AppError::Normalize(e) => write!(f, "입력 오류: {e}"),
            AppError::Eval(e) => write!(f, "계산 오류: {e}"),
            AppError::Curve(e) => write!(f, "곡선 오류: {e}"),
            AppError::Bootstrap(msg) => write!(f, "구성 오류: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<formula::RegistryError> for AppError {
    fn from(value: formula::RegistryError) -> Self {
        AppError::Registry(value)
    }
}

impl From<normalize::NormalizeError> for AppError {
    fn from(value: normalize::NormalizeError) -> Self {
        AppError::Normalize(value)
    }
}

impl From<evaluate::EvalError> for AppError {
    fn from(value: evaluate::EvalError) -> Self {
        AppError::Eval(value)
    }
}

impl From<curve::CurveError> for AppError {
    fn from(value: curve::CurveError) -> Self {
        AppError::Curve(value)
    }
}

/// 읽기 전용 카탈로그(접두어 표 + 공식 레지스트리)를 시작 시 한 번 만든다.
/// 설정된 기본 접두어가 표에 없으면 부트스트랩 구성 오류로 실패한다.
pub fn bootstrap(config: &Config) -> Result<(PrefixTable, FormulaRegistry), AppError> {
    let prefixes = PrefixTable::standard();
    let registry = FormulaRegistry::standard()?;
    if prefixes.lookup(&config.default_prefix).is_none() {
        return Err(AppError::Bootstrap(format!(
            "설정된 기본 접두어가 표에 없습니다: '{}'",
            config.default_prefix
        )));
    }
    Ok((prefixes, registry))
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let (prefixes, registry) = bootstrap(config)?;
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Calculate => ui_cli::handle_calculate(tr, &registry, &prefixes)?,
            MenuChoice::Curve => ui_cli::handle_curve(tr, &registry, &prefixes)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
