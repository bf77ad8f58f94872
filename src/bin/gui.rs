#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};
use telecom_engineering_toolbox::{
    app, config, curve,
    curve::Series,
    evaluate,
    formula::{FormulaId, FormulaRegistry},
    i18n,
    normalize::{self, NormalizedInputs},
    prefix::PrefixTable,
    session::RequestCounter,
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/ko-kr/en/en-us)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    let (prefixes, registry) = match app::bootstrap(&app_cfg) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("오류: {e}");
            return Ok(());
        }
    };

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([780.0, 620.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Telecom Engineering Toolbox",
        native,
        Box::new(move |cc| {
            let font_hint = setup_fonts(&cc.egui_ctx).err();
            Box::new(GuiApp::new(app_cfg.clone(), prefixes.clone(), registry.clone(), font_hint))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .insert(0, font_name);
    ctx.set_fonts(fonts);
}

/// 한글을 표시하기 위해 CJK 폰트를 우선 적용한다.
/// 1) assets/fonts/ 아래의 프로젝트 폰트
/// 2) 플랫폼별 시스템 폰트
/// 3) 모두 실패 시 Err를 반환하고 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<std::path::PathBuf> = vec![
        "assets/fonts/NanumGothic.ttf".into(),
        "assets/fonts/malgun.ttf".into(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"] {
            candidates.push(fonts.join(cand));
        }
    }
    candidates.extend(
        [
            "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
            "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
            "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
            "/System/Library/Fonts/AppleSDGothicNeo.ttc",
        ]
        .iter()
        .map(std::path::PathBuf::from),
    );
    for path in candidates {
        if path.exists() {
            let bytes = fs::read(&path)
                .map_err(|e| format!("Failed to read font file ({}): {e}", path.display()))?;
            apply_font_bytes(ctx, bytes, "cjk_font");
            return Ok(());
        }
    }
    Err("CJK font not found; keeping default fonts.".into())
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    prefixes: PrefixTable,
    registry: FormulaRegistry,
    // 입력 상태: 선택된 공식과 필드 순서대로의 (원시값, 접두어 기호)
    selected: Option<FormulaId>,
    values: Vec<String>,
    prefix_sel: Vec<String>,
    // 출력 상태: 결과 한 건과 활성 시리즈 한 개
    result: Option<Result<String, String>>,
    series: Option<Series>,
    requests: RequestCounter,
    export_status: Option<Result<(), String>>,
    // 설정
    lang_input: String,
    settings_saved: bool,
    font_hint: Option<String>,
}

impl GuiApp {
    fn new(
        config: config::Config,
        prefixes: PrefixTable,
        registry: FormulaRegistry,
        font_hint: Option<String>,
    ) -> Self {
        let lang_code = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        let lang_input = config.language.clone();
        Self {
            config,
            tr,
            prefixes,
            registry,
            selected: None,
            values: Vec::new(),
            prefix_sel: Vec::new(),
            result: None,
            series: None,
            requests: RequestCounter::new(),
            export_status: None,
            lang_input,
            settings_saved: false,
            font_hint,
        }
    }

    /// 공식 변경 시 입력 행을 다시 깔고 이전 결과/시리즈를 비운다.
    fn reset_rows(&mut self) {
        let field_count = self
            .selected
            .and_then(|id| self.registry.get(id))
            .map(|f| f.fields.len())
            .unwrap_or(0);
        self.values = vec![String::new(); field_count];
        self.prefix_sel = vec![self.config.default_prefix.clone(); field_count];
        self.result = None;
        self.series = None;
        self.export_status = None;
    }

    fn raw_pairs(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .cloned()
            .zip(self.prefix_sel.iter().cloned())
            .collect()
    }

    fn run_calculate(&mut self) {
        let Some(id) = self.selected else { return };
        let Some(formula) = self.registry.get(id) else { return };
        let ticket = self.requests.issue();
        let pairs = self.raw_pairs();
        let outcome = match normalize::normalize_inputs(&self.prefixes, formula, &pairs) {
            Ok(inputs) => {
                match evaluate::evaluate(&self.registry, &self.prefixes, id.key(), &inputs) {
                    Ok(result) => Ok(result.display),
                    Err(e) => Err(e.to_string()),
                }
            }
            Err(e) => Err(e.to_string()),
        };
        // 최신 요청의 응답만 반영한다 (마지막 요청 승리).
        if let Some(outcome) = self.requests.accept(ticket, outcome) {
            self.result = Some(outcome);
        }
    }

    fn run_plot(&mut self) {
        let Some(id) = self.selected else { return };
        let Some(formula) = self.registry.get(id) else { return };
        let ticket = self.requests.issue();
        // 곡선은 일러스트용: 필드별 정규화 실패는 무시하고 기본값에 맡긴다.
        let mut inputs = NormalizedInputs::new();
        for (i, field) in formula.fields.iter().enumerate() {
            let raw = self.values.get(i).map(String::as_str).unwrap_or("");
            let symbol = self.prefix_sel.get(i).map(String::as_str).unwrap_or("");
            if let Ok(value) = normalize::normalize(&self.prefixes, field.name, raw, symbol) {
                inputs.insert(field.name.to_string(), value);
            }
        }
        match curve::generate(id.key(), &inputs) {
            Ok(series) => {
                // 활성 시리즈는 한 번에 하나: 이전 것을 통째로 대체한다.
                if let Some(series) = self.requests.accept(ticket, series) {
                    self.series = Some(series);
                    self.export_status = None;
                }
            }
            Err(e) => {
                if let Some(msg) = self.requests.accept(ticket, e.to_string()) {
                    self.result = Some(Err(msg));
                }
            }
        }
    }

    fn clear_all(&mut self) {
        for v in &mut self.values {
            v.clear();
        }
        for p in &mut self.prefix_sel {
            *p = self.config.default_prefix.clone();
        }
        self.result = None;
        self.series = None;
        self.export_status = None;
    }

    fn export_csv(&mut self) {
        let Some(series) = &self.series else { return };
        let Some(path) = FileDialog::new()
            .set_file_name("series.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        let mut out = format!("{},{}\n", series.x_label, series.y_label);
        for (x, y) in &series.points {
            out.push_str(&format!("{x:e},{y:e}\n"));
        }
        self.export_status = Some(fs::write(&path, out).map_err(|e| e.to_string()));
    }

    fn apply_language(&mut self) {
        self.config.language = self.lang_input.clone();
        let lang_code = i18n::resolve_language("auto", Some(self.config.language.as_str()));
        self.tr =
            i18n::Translator::new_with_pack(&lang_code, self.config.language_pack_dir.as_deref());
        self.settings_saved = self.config.save().is_ok();
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();
        let txt = |key: &str, default: &str| tr.lookup(key).unwrap_or_else(|| default.to_string());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(txt("gui.heading", "Telecom Formula Calculator"));
            ui.small(txt(
                "gui.subtitle",
                "Educational calculator for telecommunications engineering formulas",
            ));
            if let Some(hint) = &self.font_hint {
                ui.small(format!(
                    "{} ({hint})",
                    txt("gui.settings.font_hint", "CJK font not found; Korean labels may not render.")
                ));
            }
            ui.separator();

            // 공식 선택
            let selected_title = self
                .selected
                .and_then(|id| self.registry.get(id))
                .map(|f| f.title.to_string())
                .unwrap_or_else(|| txt("gui.formula.placeholder", "Choose a formula…"));
            let before = self.selected;
            ui.horizontal(|ui| {
                ui.label(txt("gui.formula.label", "Formula"));
                let formulas: Vec<(FormulaId, &'static str)> = self
                    .registry
                    .list()
                    .iter()
                    .map(|f| (f.id, f.title))
                    .collect();
                egui::ComboBox::from_id_source("formula_choice")
                    .selected_text(selected_title)
                    .show_ui(ui, |ui| {
                        for (id, title) in formulas {
                            ui.selectable_value(&mut self.selected, Some(id), title);
                        }
                    });
            });
            if before != self.selected {
                self.reset_rows();
            }

            let Some(id) = self.selected else { return };
            let Some(formula) = self.registry.get(id) else { return };
            let fields = formula.fields;
            let desc = formula.desc;
            let explain = formula.explain;

            ui.label(desc);
            ui.small(explain);
            ui.add_space(8.0);

            // 필드 입력 행: 값 + 접두어 + 단위
            let prefix_entries = self.prefixes.entries().to_vec();
            egui::Frame::group(ui.style()).show(ui, |ui| {
                egui::Grid::new("field_grid")
                    .num_columns(4)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        for (i, field) in fields.iter().enumerate() {
                            ui.label(field.label);
                            if let Some(value) = self.values.get_mut(i) {
                                ui.add(egui::TextEdit::singleline(value).desired_width(160.0));
                            }
                            if let Some(sel) = self.prefix_sel.get_mut(i) {
                                let shown = prefix_entries
                                    .iter()
                                    .find(|e| e.symbol == sel.as_str())
                                    .map(|e| format!("{}{}", e.symbol, e.label))
                                    .unwrap_or_else(|| sel.clone());
                                egui::ComboBox::from_id_source(format!("prefix_{i}"))
                                    .selected_text(shown)
                                    .show_ui(ui, |ui| {
                                        for entry in &prefix_entries {
                                            ui.selectable_value(
                                                sel,
                                                entry.symbol.to_string(),
                                                format!("{}{}", entry.symbol, entry.label),
                                            );
                                        }
                                    })
                                    .response
                                    .on_hover_text(txt(
                                        "gui.field.prefix_tip",
                                        "SI prefix applied to the entered value",
                                    ));
                            }
                            ui.label(field.unit);
                            ui.end_row();
                        }
                    });
            });
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(txt("gui.calc.run", "Calculate")).clicked() {
                    self.run_calculate();
                }
                let plot = ui
                    .button(txt("gui.plot.run", "Plot"))
                    .on_hover_text(txt(
                        "gui.plot.tip",
                        "Sweep one variable over a fixed range and draw the curve",
                    ));
                if plot.clicked() {
                    self.run_plot();
                }
                if ui.button(txt("gui.clear.run", "Clear")).clicked() {
                    self.clear_all();
                }
                let has_series = self.series.is_some();
                if ui
                    .add_enabled(has_series, egui::Button::new(txt("gui.export.run", "Export CSV")))
                    .clicked()
                {
                    self.export_csv();
                }
            });

            match &self.result {
                Some(Ok(display)) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(52, 211, 153),
                        format!("{}: {display}", txt("gui.calc.result_prefix", "Result")),
                    );
                }
                Some(Err(message)) => {
                    ui.colored_label(
                        egui::Color32::from_rgb(239, 68, 68),
                        format!("{}: {message}", txt("gui.calc.error_prefix", "Error")),
                    );
                }
                None => {}
            }
            if let Some(status) = &self.export_status {
                match status {
                    Ok(()) => ui.small(txt("gui.export.done", "Series exported.")),
                    Err(e) => ui.small(format!("{}: {e}", txt("gui.export.error", "Export failed"))),
                };
            }

            if let Some(series) = &self.series {
                ui.add_space(8.0);
                draw_series(ui, series);
            }

            ui.add_space(12.0);
            egui::CollapsingHeader::new(txt("gui.settings.heading", "Settings")).show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(txt("gui.settings.language", "Language"));
                    egui::ComboBox::from_id_source("lang_choice")
                        .selected_text(self.lang_input.clone())
                        .show_ui(ui, |ui| {
                            for code in ["auto", "ko", "en-us"] {
                                ui.selectable_value(
                                    &mut self.lang_input,
                                    code.to_string(),
                                    code,
                                );
                            }
                        });
                    if ui.button(txt("gui.settings.save", "Save")).clicked() {
                        self.apply_language();
                    }
                    if self.settings_saved {
                        ui.small(txt("gui.settings.saved", "Saved."));
                    }
                });
            });
        });
    }
}

/// 활성 시리즈를 선 그래프로 그린다. 플롯 위젯 없이 egui 페인터만 쓴다.
fn draw_series(ui: &mut egui::Ui, series: &Series) {
    use egui::{pos2, vec2, Align2, Color32, FontId, Sense, Shape, Stroke};

    let width = ui.available_width().min(640.0);
    let (response, painter) = ui.allocate_painter(vec2(width, 240.0), Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let points: Vec<(f64, f64)> = series
        .points
        .iter()
        .copied()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if points.len() < 2 {
        return;
    }
    let (mut min_x, mut max_x) = (points[0].0, points[0].0);
    let (mut min_y, mut max_y) = (points[0].1, points[0].1);
    for &(x, y) in &points {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);

    let pad = 30.0_f32;
    let to_screen = |x: f64, y: f64| {
        pos2(
            rect.left() + pad + (((x - min_x) / span_x) as f32) * (rect.width() - 2.0 * pad),
            rect.bottom() - pad - (((y - min_y) / span_y) as f32) * (rect.height() - 2.0 * pad),
        )
    };

    let axis_color = ui.visuals().weak_text_color();
    painter.line_segment(
        [to_screen(min_x, min_y), to_screen(max_x, min_y)],
        Stroke::new(1.0, axis_color),
    );
    painter.line_segment(
        [to_screen(min_x, min_y), to_screen(min_x, max_y)],
        Stroke::new(1.0, axis_color),
    );

    let line: Vec<egui::Pos2> = points.iter().map(|&(x, y)| to_screen(x, y)).collect();
    painter.add(Shape::line(line, Stroke::new(1.5, Color32::from_rgb(96, 165, 250))));

    let font = FontId::proportional(11.0);
    painter.text(
        rect.center_bottom() - vec2(0.0, 4.0),
        Align2::CENTER_BOTTOM,
        series.x_label,
        font.clone(),
        axis_color,
    );
    painter.text(
        rect.left_top() + vec2(4.0, 4.0),
        Align2::LEFT_TOP,
        series.y_label,
        font.clone(),
        axis_color,
    );
    painter.text(
        to_screen(min_x, min_y) + vec2(0.0, 4.0),
        Align2::CENTER_TOP,
        format!("{min_x:.3e}"),
        font.clone(),
        axis_color,
    );
    painter.text(
        to_screen(max_x, min_y) + vec2(0.0, 4.0),
        Align2::CENTER_TOP,
        format!("{max_x:.3e}"),
        font,
        axis_color,
    );
}
