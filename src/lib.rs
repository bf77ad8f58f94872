//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 GUI에서도 같은 코드를 쓰게 한다.

pub mod app;
pub mod config;
pub mod curve;
pub mod evaluate;
pub mod formula;
pub mod i18n;
pub mod normalize;
pub mod prefix;
pub mod session;
pub mod telecom;
pub mod ui_cli;
