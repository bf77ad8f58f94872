use clap::Parser;
use telecom_engineering_toolbox::{app, config, i18n};

/// 통신 공학 공식 계산기 (CLI).
#[derive(Debug, Parser)]
#[command(name = "telecom_engineering_toolbox_cli", version)]
struct Cli {
    /// 언어 코드 (auto/ko/ko-kr/en/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 언어팩 디렉터리 (기본: locales/)
    #[arg(long)]
    locales_dir: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let pack_dir = cli.locales_dir.as_deref().or(cfg.language_pack_dir.as_deref());
    let tr = i18n::Translator::new_with_pack(&lang, pack_dir);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
