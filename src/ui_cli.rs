use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::curve;
use crate::evaluate;
use crate::formula::{Formula, FormulaRegistry};
use crate::i18n::{keys, Translator};
use crate::normalize::{self, NormalizedInputs};
use crate::prefix::PrefixTable;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Curve,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CALCULATE));
    println!("{}", tr.t(keys::MAIN_MENU_CURVE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Curve),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 공식 목록을 표시하고 번호로 하나를 고른다. 엔터만 치면 None.
fn select_formula<'a>(
    tr: &Translator,
    registry: &'a FormulaRegistry,
) -> Result<Option<&'a Formula>, AppError> {
    println!("{}", tr.t(keys::FORMULA_LIST_HEADING));
    for (i, formula) in registry.list().iter().enumerate() {
        println!("{}) {}  —  {}", i + 1, formula.title, formula.desc);
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_FORMULA_SELECT))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if n >= 1 && n <= registry.list().len() {
                return Ok(Some(&registry.list()[n - 1]));
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

/// 공식이 선언한 필드 순서대로 (원시값, 접두어) 쌍을 읽는다.
fn read_raw_pairs(
    tr: &Translator,
    formula: &Formula,
) -> Result<Vec<(String, String)>, AppError> {
    println!("{}", tr.t(keys::PREFIX_NOTE));
    let mut pairs = Vec::with_capacity(formula.fields.len());
    for field in formula.fields {
        let raw = read_line(&format!("{} [{}]: ", field.label, field.unit))?;
        let symbol = read_line(tr.t(keys::PROMPT_PREFIX_SELECT))?;
        pairs.push((raw.trim().to_string(), symbol.trim().to_string()));
    }
    Ok(pairs)
}

/// 공식 계산 메뉴를 처리한다. 정규화/평가 오류는 해당 동작에만 국한되며
/// 필드 이름과 함께 출력하고 메뉴로 돌아간다.
pub fn handle_calculate(
    tr: &Translator,
    registry: &FormulaRegistry,
    prefixes: &PrefixTable,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CALC_HEADING));
    println!("{}", tr.t(keys::HELP_CALCULATE));
    let formula = match select_formula(tr, registry)? {
        Some(f) => f,
        None => return Ok(()),
    };
    println!("{}  —  {}", formula.desc, formula.explain);
    let pairs = read_raw_pairs(tr, formula)?;
    let inputs = match normalize::normalize_inputs(prefixes, formula, &pairs) {
        Ok(inputs) => inputs,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };
    match evaluate::evaluate(registry, prefixes, formula.id.key(), &inputs) {
        Ok(result) => println!("{} {}", tr.t(keys::CALC_RESULT_LABEL), result.display),
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 곡선 데이터 메뉴를 처리한다. 곡선은 일러스트용이라 필드별 정규화 실패는
/// 무시하고 기본값 대체에 맡긴다.
pub fn handle_curve(
    tr: &Translator,
    registry: &FormulaRegistry,
    prefixes: &PrefixTable,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CURVE_HEADING));
    println!("{}", tr.t(keys::HELP_CURVE));
    println!("{}", tr.t(keys::CURVE_OPTIONAL_NOTE));
    let formula = match select_formula(tr, registry)? {
        Some(f) => f,
        None => return Ok(()),
    };
    let pairs = read_raw_pairs(tr, formula)?;
    let mut inputs = NormalizedInputs::new();
    for (i, field) in formula.fields.iter().enumerate() {
        if let Some((raw, symbol)) = pairs.get(i) {
            if let Ok(value) = normalize::normalize(prefixes, field.name, raw, symbol) {
                inputs.insert(field.name.to_string(), value);
            }
        }
    }
    match curve::generate(formula.id.key(), &inputs) {
        Ok(series) => {
            println!("{} {}", tr.t(keys::CURVE_POINTS_LABEL), series.points.len());
            println!("{:>16}  {:>16}", series.x_label, series.y_label);
            for (x, y) in &series.points {
                println!("{x:>16.6e}  {y:>16.6e}");
            }
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    match sel.trim() {
        "1" => cfg.language = "auto".to_string(),
        "2" => cfg.language = "ko".to_string(),
        "3" => cfg.language = "en-us".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
