#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use log::{info, warn};
use power_plan_toolbox::{
    calculators::{
        self, ElectricalQuantitySet, Phase, CONDUCTOR_AREA_MAX, CONDUCTOR_AREA_MIN,
        CONDUCTOR_AREA_STEP, DEFAULT_CONDUCTOR_AREA, DEFAULT_POWER_FACTOR, POWER_FACTOR_MAX,
        POWER_FACTOR_MIN, POWER_FACTOR_STEP,
    },
    config::{self, AppearanceMode, LanguageOption, ThemeColor},
    i18n::{self, keys, Translator},
    projects::{
        component_groups, transformer_watt_options, BreakerCurve, ComponentCategory,
        ComponentDraft, ComponentEdit, ComponentSpec, FileBlobStore, KwhConfiguration,
        MemoryBlobStore, ProjectDraft, ProjectEdit, ProjectStore, RelayCoilType, SelectionState,
        StoreError, AMP_OPTIONS, POLE_OPTIONS, QUANTITY_MAX, QUANTITY_MIN, RELAY_VOLTAGE_OPTIONS,
        SWITCH_POSITION_OPTIONS,
    },
    report,
};
use rfd::FileDialog;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "power_plan")]
struct GuiArgs {
    /// UI language: auto, en or nl
    #[arg(long, default_value = "auto")]
    lang: String,
    /// Directory holding projects.json
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = GuiArgs::parse();

    let mut app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!("config unavailable, using defaults: {e}");
        config::Config::default()
    });
    if let Some(dir) = args.data_dir {
        app_cfg.data_dir = dir;
    }
    let lang = i18n::resolve_language(&args.lang, app_cfg.language_code());
    let tr = Translator::new_with_pack(&lang, app_cfg.language_pack_dir.as_deref());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Power Plan",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg, tr))),
    )
}

/// 프로젝트 저장소를 연다. 기존 파일을 읽지 못하면 덮어쓰지 않도록 메모리 저장소로 시작한다.
fn open_store(dir: &std::path::Path) -> (ProjectStore, Option<String>) {
    let mut store = ProjectStore::new(Box::new(FileBlobStore::new(dir)));
    match store.load() {
        Ok(()) => (store, None),
        Err(e) => {
            warn!("could not load projects from {}: {e}", dir.display());
            (
                ProjectStore::new(Box::new(MemoryBlobStore::new())),
                Some(e.to_string()),
            )
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Calculators,
    Projects,
    Reference,
    Settings,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Calculator {
    OhmsLaw,
    Power,
    Watt,
    VoltageDrop,
}

/// 계산 결과 영역. 결과 줄 또는 안내 문구 하나.
#[derive(Default)]
struct CalcOutput {
    lines: Vec<String>,
    error: Option<String>,
}

impl CalcOutput {
    fn ok(lines: Vec<String>) -> Self {
        Self { lines, error: None }
    }

    fn err(message: String) -> Self {
        Self {
            lines: Vec::new(),
            error: Some(message),
        }
    }
}

/// 프로젝트 화면에서 모은 동작. UI를 그린 뒤 한꺼번에 적용한다.
enum ProjectAction {
    AddProject,
    Open(Uuid),
    Close,
    DeleteProject(Uuid),
    DeleteSelectedProjects,
    StartEdit(Uuid),
    SaveEdit(Uuid),
    AddComponent(Uuid),
    ToggleAcquired(Uuid),
    EditComponent(Uuid, ComponentEdit),
    DeleteComponent(Uuid, Uuid),
    DeleteSelectedComponents(Uuid),
    Export,
    Import,
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    store: ProjectStore,
    status: Option<String>,
    tab: Tab,
    calculator: Calculator,
    // 옴의 법칙
    ohms_voltage: String,
    ohms_current: String,
    ohms_resistance: String,
    ohms_power: String,
    ohms_values: [String; 4],
    ohms_error: Option<String>,
    // 전력 추정
    power_phase: Phase,
    power_voltage: String,
    power_current: String,
    power_pf: f64,
    power_output: CalcOutput,
    // 와트
    watt_voltage: String,
    watt_current: String,
    watt_pf: f64,
    watt_output: CalcOutput,
    // 전압강하
    drop_length: String,
    drop_current: String,
    drop_supply: String,
    drop_area: f64,
    drop_output: CalcOutput,
    // 프로젝트
    project_draft: ProjectDraft,
    quick_add_name: String,
    project_selection: SelectionState,
    open_project: Option<Uuid>,
    component_draft: ComponentDraft,
    component_selection: SelectionState,
    editing: bool,
    edit_name: String,
    edit_voltage: String,
    edit_notes: String,
}

impl GuiApp {
    fn new(config: config::Config, tr: Translator) -> Self {
        let (store, load_error) = open_store(&config.data_dir);
        info!("GUI started with {} project(s)", store.projects().len());
        Self {
            config,
            tr,
            store,
            status: load_error,
            tab: Tab::Calculators,
            calculator: Calculator::OhmsLaw,
            ohms_voltage: String::new(),
            ohms_current: String::new(),
            ohms_resistance: String::new(),
            ohms_power: String::new(),
            ohms_values: calculators::format_quantity_set(&ElectricalQuantitySet::default()),
            ohms_error: None,
            power_phase: Phase::Single,
            power_voltage: String::new(),
            power_current: String::new(),
            power_pf: DEFAULT_POWER_FACTOR,
            power_output: CalcOutput::default(),
            watt_voltage: String::new(),
            watt_current: String::new(),
            watt_pf: 1.0,
            watt_output: CalcOutput::default(),
            drop_length: String::new(),
            drop_current: String::new(),
            drop_supply: "230".to_string(),
            drop_area: DEFAULT_CONDUCTOR_AREA,
            drop_output: CalcOutput::default(),
            project_draft: ProjectDraft::default(),
            quick_add_name: String::new(),
            project_selection: SelectionState::default(),
            open_project: None,
            component_draft: ComponentDraft::default(),
            component_selection: SelectionState::default(),
            editing: false,
            edit_name: String::new(),
            edit_voltage: String::new(),
            edit_notes: String::new(),
        }
    }

    /// 밝기 모드와 강조 색을 적용한다.
    fn apply_theme(&self, ctx: &egui::Context, frame: &Frame) {
        let dark = match self.config.appearance {
            AppearanceMode::Light => false,
            AppearanceMode::Dark => true,
            AppearanceMode::System => !matches!(frame.info().system_theme, Some(eframe::Theme::Light)),
        };
        let mut visuals = if dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        let [r, g, b] = self.config.theme_color.rgb();
        let accent = egui::Color32::from_rgb(r, g, b);
        visuals.selection.bg_fill = accent;
        visuals.hyperlink_color = accent;
        visuals.widgets.hovered.bg_stroke.color = accent;
        ctx.set_visuals(visuals);
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.style_mut().wrap = Some(false);
        ui.vertical_centered(|ui| {
            ui.heading(self.tr.t(keys::APP_TITLE));
            ui.add_space(8.0);
        });
        for (tab, key) in [
            (Tab::Calculators, keys::TAB_CALCULATORS),
            (Tab::Projects, keys::TAB_PROJECTS),
            (Tab::Reference, keys::TAB_REFERENCE),
            (Tab::Settings, keys::TAB_SETTINGS),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(self.tr.t(key))
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn ui_calculators(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (calc, key) in [
                (Calculator::OhmsLaw, keys::MAIN_MENU_OHMS),
                (Calculator::Power, keys::MAIN_MENU_POWER),
                (Calculator::Watt, keys::MAIN_MENU_WATT),
                (Calculator::VoltageDrop, keys::MAIN_MENU_DROP),
            ] {
                let label = strip_menu_number(self.tr.t(key));
                ui.selectable_value(&mut self.calculator, calc, label);
            }
        });
        ui.separator();
        match self.calculator {
            Calculator::OhmsLaw => self.ui_ohms_law(ui),
            Calculator::Power => self.ui_power(ui),
            Calculator::Watt => self.ui_watt(ui),
            Calculator::VoltageDrop => self.ui_voltage_drop(ui),
        }
    }

    fn ui_ohms_law(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.label(tr.t(keys::OHMS_PROMPT));
        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("ohms_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    for (key, value) in [
                        (keys::FIELD_VOLTAGE, &mut self.ohms_voltage),
                        (keys::FIELD_CURRENT, &mut self.ohms_current),
                        (keys::FIELD_RESISTANCE, &mut self.ohms_resistance),
                        (keys::FIELD_POWER, &mut self.ohms_power),
                    ] {
                        ui.label(tr.t(key));
                        ui.text_edit_singleline(value);
                        ui.end_row();
                    }
                });
        });
        ui.add_space(6.0);
        if ui.button(tr.t(keys::OHMS_BUTTON)).clicked() {
            let set = ElectricalQuantitySet::from_text(
                &self.ohms_voltage,
                &self.ohms_current,
                &self.ohms_resistance,
                &self.ohms_power,
            );
            match calculators::solve(&set) {
                Ok(solution) => {
                    self.ohms_values = solution.formatted();
                    self.ohms_error = None;
                }
                Err(e) => {
                    self.ohms_values = calculators::format_quantity_set(&set);
                    self.ohms_error =
                        Some(report::calc_error_message(tr, &e, keys::OHMS_VALIDATION));
                }
            }
        }
        ui.separator();
        ui.strong(tr.t(keys::SECTION_RESULTS));
        for line in report::ohms_lines(tr, &self.ohms_values) {
            ui.label(line);
        }
        if let Some(msg) = &self.ohms_error {
            ui.colored_label(ui.visuals().error_fg_color, msg);
        }
    }

    fn ui_power(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.label(tr.t(keys::POWER_PROMPT));
        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("power_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::FIELD_PHASE));
                    ui.horizontal(|ui| {
                        ui.selectable_value(&mut self.power_phase, Phase::Single, tr.t(keys::PHASE_SINGLE));
                        ui.selectable_value(&mut self.power_phase, Phase::Three, tr.t(keys::PHASE_THREE));
                    });
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_VOLTAGE));
                    ui.text_edit_singleline(&mut self.power_voltage);
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_CURRENT));
                    ui.text_edit_singleline(&mut self.power_current);
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_POWER_FACTOR));
                    ui.add(
                        egui::Slider::new(&mut self.power_pf, POWER_FACTOR_MIN..=POWER_FACTOR_MAX)
                            .step_by(POWER_FACTOR_STEP)
                            .fixed_decimals(2),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(6.0);
        if ui.button(tr.t(keys::POWER_BUTTON)).clicked() {
            self.power_output = match calculators::estimate_power_from_text(
                &self.power_voltage,
                &self.power_current,
                self.power_phase,
                self.power_pf,
            ) {
                Ok(estimate) => CalcOutput::ok(report::power_lines(tr, &estimate)),
                Err(e) => CalcOutput::err(report::calc_error_message(tr, &e, keys::POWER_VALIDATION)),
            };
        }
        show_output(ui, tr, &self.power_output);
    }

    fn ui_watt(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.label(tr.t(keys::WATT_PROMPT));
        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("watt_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::FIELD_VOLTAGE));
                    ui.text_edit_singleline(&mut self.watt_voltage);
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_CURRENT));
                    ui.text_edit_singleline(&mut self.watt_current);
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_POWER_FACTOR));
                    ui.add(
                        egui::Slider::new(&mut self.watt_pf, POWER_FACTOR_MIN..=POWER_FACTOR_MAX)
                            .step_by(POWER_FACTOR_STEP)
                            .fixed_decimals(2),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(6.0);
        if ui.button(tr.t(keys::WATT_BUTTON)).clicked() {
            self.watt_output = match calculators::compute_watts_from_text(
                &self.watt_voltage,
                &self.watt_current,
                self.watt_pf,
            ) {
                Ok(estimate) => CalcOutput::ok(report::watt_lines(tr, &estimate)),
                Err(e) => CalcOutput::err(report::calc_error_message(tr, &e, keys::WATT_VALIDATION)),
            };
        }
        show_output(ui, tr, &self.watt_output);
    }

    fn ui_voltage_drop(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.label(tr.t(keys::DROP_PROMPT));
        ui.add_space(6.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("drop_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::FIELD_LENGTH));
                    ui.text_edit_singleline(&mut self.drop_length);
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_LOAD_CURRENT));
                    ui.text_edit_singleline(&mut self.drop_current);
                    ui.end_row();
                    ui.label(tr.t(keys::FIELD_SUPPLY_VOLTAGE));
                    ui.text_edit_singleline(&mut self.drop_supply);
                    ui.end_row();
                    ui.label(tr.tf(
                        keys::FIELD_CONDUCTOR_AREA,
                        &[("area", format!("{:.1}", self.drop_area))],
                    ));
                    ui.add(
                        egui::Slider::new(&mut self.drop_area, CONDUCTOR_AREA_MIN..=CONDUCTOR_AREA_MAX)
                            .step_by(CONDUCTOR_AREA_STEP)
                            .suffix(" mm²"),
                    );
                    ui.end_row();
                });
        });
        ui.add_space(6.0);
        if ui.button(tr.t(keys::DROP_BUTTON)).clicked() {
            self.drop_output = match calculators::estimate_voltage_drop_from_text(
                &self.drop_length,
                &self.drop_current,
                &self.drop_supply,
                self.drop_area,
            ) {
                Ok(estimate) => CalcOutput::ok(report::drop_lines(tr, &estimate)),
                Err(e) => CalcOutput::err(report::calc_error_message(tr, &e, keys::DROP_VALIDATION)),
            };
        }
        show_output(ui, tr, &self.drop_output);
    }

    fn ui_reference(&mut self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t(keys::REFERENCE_QUICK));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            for line in report::reference_constant_lines(tr) {
                ui.label(line);
            }
        });
        ui.add_space(8.0);
        ui.heading(tr.t(keys::REFERENCE_TIPS));
        for tip in report::reference_tip_lines(tr) {
            ui.add(egui::Label::new(format!("• {tip}")).wrap(true));
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        let before = self.config.clone();
        let tr = &self.tr;
        ui.heading(tr.t(keys::SETTINGS_APPEARANCE));
        ui.horizontal(|ui| {
            for mode in AppearanceMode::ALL {
                ui.selectable_value(&mut self.config.appearance, mode, tr.t(mode.i18n_key()));
            }
        });
        ui.separator();
        ui.heading(tr.t(keys::SETTINGS_THEME_COLOR));
        ui.horizontal_wrapped(|ui| {
            for color in ThemeColor::ALL {
                let [r, g, b] = color.rgb();
                let selected = self.config.theme_color == color;
                let mut button = egui::Button::new(
                    egui::RichText::new(tr.t(color.i18n_key())).color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(r, g, b));
                if selected {
                    button = button.stroke(egui::Stroke::new(2.0, ui.visuals().text_color()));
                }
                if ui.add(button).clicked() {
                    self.config.theme_color = color;
                }
            }
        });
        ui.separator();
        ui.heading(tr.t(keys::SETTINGS_LANGUAGE));
        egui::ComboBox::from_id_source("lang_choice")
            .selected_text(tr.t(self.config.language.i18n_key()))
            .show_ui(ui, |ui| {
                for option in LanguageOption::ALL {
                    ui.selectable_value(&mut self.config.language, option, tr.t(option.i18n_key()));
                }
            });

        if self.config != before {
            if self.config.language != before.language {
                let lang = i18n::resolve_language("auto", self.config.language_code());
                self.tr = Translator::new_with_pack(&lang, self.config.language_pack_dir.as_deref());
            }
            match self.config.save() {
                Ok(()) => self.status = Some(self.tr.t(keys::SETTINGS_SAVED).to_string()),
                Err(e) => {
                    warn!("failed to save settings: {e}");
                    self.status = Some(e.to_string());
                }
            }
        }
    }

    fn ui_projects(&mut self, ui: &mut egui::Ui) -> Vec<ProjectAction> {
        let mut actions = Vec::new();
        match self.open_project {
            Some(id) => self.ui_project_detail(ui, id, &mut actions),
            None => self.ui_project_list(ui, &mut actions),
        }
        actions
    }

    fn ui_project_list(&mut self, ui: &mut egui::Ui, actions: &mut Vec<ProjectAction>) {
        let tr = &self.tr;
        ui.horizontal(|ui| {
            ui.heading(tr.t(keys::PROJECTS_EXISTING));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(tr.t(keys::PROJECTS_IMPORT)).clicked() {
                    actions.push(ProjectAction::Import);
                }
                if ui.button(tr.t(keys::PROJECTS_EXPORT)).clicked() {
                    actions.push(ProjectAction::Export);
                }
                let select_label = if self.project_selection.is_active() {
                    tr.t(keys::PROJECTS_SELECT_DONE)
                } else {
                    tr.t(keys::PROJECTS_SELECT_START)
                };
                if ui.button(select_label).clicked() {
                    self.project_selection.toggle_mode();
                }
                if self.project_selection.is_active()
                    && ui
                        .add_enabled(
                            !self.project_selection.is_empty(),
                            egui::Button::new(tr.t(keys::PROJECTS_DELETE_SELECTED)),
                        )
                        .clicked()
                {
                    actions.push(ProjectAction::DeleteSelectedProjects);
                }
            });
        });

        egui::Frame::group(ui.style()).show(ui, |ui| {
            if self.store.projects().is_empty() {
                ui.label(tr.t(keys::PROJECTS_EMPTY));
            }
            for project in self.store.projects() {
                ui.horizontal(|ui| {
                    if self.project_selection.is_active() {
                        let mut checked = self.project_selection.is_selected(project.id);
                        if ui.checkbox(&mut checked, "").changed() {
                            self.project_selection.toggle(project.id);
                        }
                    }
                    if ui.link(&project.name).clicked() {
                        actions.push(ProjectAction::Open(project.id));
                    }
                    if !project.voltage.is_empty() {
                        ui.weak(&project.voltage);
                    }
                    let (done, total) = project.acquired_progress();
                    ui.weak(tr.tf(
                        keys::PROJECT_PROGRESS,
                        &[("done", done.to_string()), ("total", total.to_string())],
                    ));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(tr.t(keys::ACTION_DELETE)).clicked() {
                            actions.push(ProjectAction::DeleteProject(project.id));
                        }
                    });
                });
            }
        });

        ui.add_space(10.0);
        ui.heading(tr.t(keys::PROJECTS_NEW));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("new_project_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(tr.t(keys::PROJECT_NAME));
                    ui.text_edit_singleline(&mut self.project_draft.name);
                    ui.end_row();
                    ui.label(tr.t(keys::PROJECT_VOLTAGE));
                    ui.text_edit_singleline(&mut self.project_draft.voltage);
                    ui.end_row();
                    ui.label(tr.t(keys::PROJECT_NOTES));
                    ui.text_edit_multiline(&mut self.project_draft.notes);
                    ui.end_row();
                });

            ui.separator();
            ui.strong(tr.t(keys::PROJECT_COMPONENTS));
            let mut remove_pending = None;
            for pending in &self.project_draft.components {
                ui.horizontal(|ui| {
                    ui.label(format!("{} ×{}", pending.name, pending.quantity));
                    ui.weak(pending.detail_line());
                    if ui.small_button(tr.t(keys::ACTION_DELETE)).clicked() {
                        remove_pending = Some(pending.id);
                    }
                });
            }
            if let Some(id) = remove_pending {
                self.project_draft.remove_pending(id);
            }
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.quick_add_name)
                        .hint_text(tr.t(keys::COMPONENT_QUICK_ADD_PLACEHOLDER)),
                );
                if ui
                    .add_enabled(
                        !self.quick_add_name.trim().is_empty(),
                        egui::Button::new(tr.t(keys::COMPONENT_QUICK_ADD)),
                    )
                    .clicked()
                    && self.project_draft.add_custom_item(&self.quick_add_name).is_some()
                {
                    self.quick_add_name.clear();
                }
            });
            egui::CollapsingHeader::new(tr.t(keys::COMPONENT_ADD_TITLE))
                .id_source("new_project_component")
                .show(ui, |ui| {
                    component_form(ui, tr, &mut self.project_draft.component_draft, "pending");
                    if ui
                        .add_enabled(
                            self.project_draft.component_draft.can_save(),
                            egui::Button::new(tr.t(keys::COMPONENT_SAVE)),
                        )
                        .clicked()
                    {
                        self.project_draft.commit_component();
                    }
                });
            ui.add_space(6.0);
            if ui
                .add_enabled(
                    self.project_draft.can_save(),
                    egui::Button::new(tr.t(keys::PROJECT_ADD)),
                )
                .clicked()
            {
                actions.push(ProjectAction::AddProject);
            }
        });
    }

    fn ui_project_detail(&mut self, ui: &mut egui::Ui, project_id: Uuid, actions: &mut Vec<ProjectAction>) {
        let tr = &self.tr;
        let Some(project) = self.store.registry().project(project_id) else {
            actions.push(ProjectAction::Close);
            return;
        };
        ui.horizontal(|ui| {
            if ui.button("←").clicked() {
                actions.push(ProjectAction::Close);
            }
            ui.heading(&project.name);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.editing {
                    if ui.button(tr.t(keys::PROJECTS_EDIT_DONE)).clicked() {
                        actions.push(ProjectAction::SaveEdit(project_id));
                    }
                } else if ui.button(tr.t(keys::PROJECTS_EDIT_START)).clicked() {
                    actions.push(ProjectAction::StartEdit(project_id));
                }
                let select_label = if self.component_selection.is_active() {
                    tr.t(keys::PROJECTS_SELECT_DONE)
                } else {
                    tr.t(keys::PROJECTS_SELECT_START)
                };
                if ui.button(select_label).clicked() {
                    self.component_selection.toggle_mode();
                }
                if self.component_selection.is_active()
                    && ui
                        .add_enabled(
                            !self.component_selection.is_empty(),
                            egui::Button::new(tr.t(keys::PROJECTS_DELETE_SELECTED)),
                        )
                        .clicked()
                {
                    actions.push(ProjectAction::DeleteSelectedComponents(project_id));
                }
            });
        });

        ui.strong(tr.t(keys::PROJECT_DETAILS));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("project_detail_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    if self.editing {
                        ui.label(tr.t(keys::PROJECT_NAME));
                        ui.text_edit_singleline(&mut self.edit_name);
                        ui.end_row();
                        ui.label(tr.t(keys::PROJECT_VOLTAGE));
                        ui.text_edit_singleline(&mut self.edit_voltage);
                        ui.end_row();
                        ui.label(tr.t(keys::PROJECT_NOTES));
                        ui.text_edit_multiline(&mut self.edit_notes);
                        ui.end_row();
                    } else {
                        ui.label(tr.t(keys::PROJECT_VOLTAGE));
                        ui.label(&project.voltage);
                        ui.end_row();
                        ui.label(tr.t(keys::PROJECT_NOTES));
                        ui.label(&project.notes);
                        ui.end_row();
                    }
                });
        });

        ui.add_space(8.0);
        let (done, total) = project.acquired_progress();
        ui.horizontal(|ui| {
            ui.strong(tr.t(keys::PROJECT_COMPONENTS));
            ui.weak(tr.tf(
                keys::PROJECT_PROGRESS,
                &[("done", done.to_string()), ("total", total.to_string())],
            ));
        });
        let groups = component_groups(project);
        if groups.is_empty() {
            ui.label(tr.t(keys::PROJECT_COMPONENTS_EMPTY));
        }
        for group in groups {
            egui::CollapsingHeader::new(tr.t(group.category.i18n_key()))
                .id_source(("group", group.category.title()))
                .default_open(true)
                .show(ui, |ui| {
                    for component in group.components {
                        ui.horizontal(|ui| {
                            if self.component_selection.is_active() {
                                let mut checked = self.component_selection.is_selected(component.id);
                                if ui.checkbox(&mut checked, "").changed() {
                                    self.component_selection.toggle(component.id);
                                }
                            }
                            let mut acquired = component.acquired;
                            if ui.checkbox(&mut acquired, &component.name).changed() {
                                actions.push(ProjectAction::ToggleAcquired(component.id));
                            }
                            if self.editing {
                                let mut quantity = component.quantity;
                                if ui
                                    .add(
                                        egui::DragValue::new(&mut quantity)
                                            .clamp_range(QUANTITY_MIN..=QUANTITY_MAX)
                                            .prefix("×"),
                                    )
                                    .changed()
                                {
                                    actions.push(ProjectAction::EditComponent(
                                        component.id,
                                        ComponentEdit {
                                            quantity: Some(quantity),
                                            ..ComponentEdit::default()
                                        },
                                    ));
                                }
                            } else {
                                ui.label(format!("×{}", component.quantity));
                            }
                            ui.weak(component.detail_line());
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button(tr.t(keys::ACTION_DELETE)).clicked() {
                                    actions.push(ProjectAction::DeleteComponent(project_id, component.id));
                                }
                            });
                        });
                    }
                });
        }

        ui.add_space(10.0);
        ui.heading(tr.t(keys::COMPONENT_ADD_TITLE));
        egui::Frame::group(ui.style()).show(ui, |ui| {
            component_form(ui, tr, &mut self.component_draft, "detail");
            if ui
                .add_enabled(
                    self.component_draft.can_save(),
                    egui::Button::new(tr.t(keys::COMPONENT_SAVE)),
                )
                .clicked()
            {
                actions.push(ProjectAction::AddComponent(project_id));
            }
        });
    }

    fn apply_project_actions(&mut self, actions: Vec<ProjectAction>) {
        for action in actions {
            if let Err(e) = self.apply_project_action(action) {
                warn!("failed to persist projects: {e}");
                self.status = Some(e.to_string());
            }
        }
    }

    fn apply_project_action(&mut self, action: ProjectAction) -> Result<(), StoreError> {
        match action {
            ProjectAction::AddProject => {
                if self.store.add_project_from_draft(&mut self.project_draft)?.is_some() {
                    self.status = Some(self.tr.t(keys::PROJECT_ADDED).to_string());
                }
            }
            ProjectAction::Open(id) => {
                self.open_project = Some(id);
                self.editing = false;
                self.component_selection = SelectionState::default();
                self.component_draft.reset();
            }
            ProjectAction::Close => {
                self.open_project = None;
                self.editing = false;
            }
            ProjectAction::DeleteProject(id) => {
                self.store.remove_project(id)?;
                self.project_selection.forget(id);
            }
            ProjectAction::DeleteSelectedProjects => {
                let ids = self.project_selection.take_for_delete();
                let removed = self.store.delete_projects(&ids)?;
                self.status = Some(
                    self.tr
                        .tf(keys::PROJECTS_DELETED, &[("count", removed.to_string())]),
                );
            }
            ProjectAction::StartEdit(id) => {
                if let Some(project) = self.store.registry().project(id) {
                    self.edit_name = project.name.clone();
                    self.edit_voltage = project.voltage.clone();
                    self.edit_notes = project.notes.clone();
                    self.editing = true;
                }
            }
            ProjectAction::SaveEdit(id) => {
                let edit = ProjectEdit {
                    name: Some(self.edit_name.trim().to_string()),
                    voltage: Some(self.edit_voltage.trim().to_string()),
                    notes: Some(self.edit_notes.trim().to_string()),
                };
                self.store.update_project(id, edit)?;
                self.editing = false;
            }
            ProjectAction::AddComponent(project_id) => {
                self.store.add_component(project_id, &mut self.component_draft)?;
            }
            ProjectAction::ToggleAcquired(id) => {
                self.store.toggle_acquired(id)?;
            }
            ProjectAction::EditComponent(id, edit) => {
                self.store.edit_component(id, edit)?;
            }
            ProjectAction::DeleteComponent(project_id, id) => {
                self.store.remove_component(project_id, id)?;
                self.component_selection.forget(id);
            }
            ProjectAction::DeleteSelectedComponents(project_id) => {
                let ids = self.component_selection.take_for_delete();
                let removed = self.store.delete_components(project_id, &ids)?;
                self.status = Some(
                    self.tr
                        .tf(keys::PROJECTS_DELETED, &[("count", removed.to_string())]),
                );
            }
            ProjectAction::Export => {
                if let Some(path) = FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("projects.json")
                    .save_file()
                {
                    self.store.export_to(&path)?;
                    self.status = Some(self.tr.tf(
                        keys::PROJECTS_EXPORTED,
                        &[("path", path.display().to_string())],
                    ));
                }
            }
            ProjectAction::Import => {
                if let Some(path) = FileDialog::new().add_filter("JSON", &["json"]).pick_file() {
                    let count = self.store.import_from(&path)?;
                    self.project_selection = SelectionState::default();
                    self.status = Some(
                        self.tr
                            .tf(keys::PROJECTS_IMPORTED, &[("count", count.to_string())]),
                    );
                }
            }
        }
        Ok(())
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut Frame) {
        self.apply_theme(ctx, frame);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.status {
                    Some(msg) => ui.label(msg),
                    None => ui.weak(self.config.data_dir.display().to_string()),
                };
            });
        });

        egui::SidePanel::left("nav")
            .resizable(true)
            .min_width(140.0)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });

        let mut actions = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match self.tab {
                    Tab::Calculators => self.ui_calculators(ui),
                    Tab::Projects => actions = self.ui_projects(ui),
                    Tab::Reference => self.ui_reference(ui),
                    Tab::Settings => self.ui_settings(ui),
                });
        });
        self.apply_project_actions(actions);
    }
}

fn show_output(ui: &mut egui::Ui, tr: &Translator, output: &CalcOutput) {
    ui.separator();
    ui.strong(tr.t(keys::SECTION_RESULTS));
    for line in &output.lines {
        ui.label(line);
    }
    if let Some(msg) = &output.error {
        ui.colored_label(ui.visuals().error_fg_color, msg);
    }
}

/// CLI 메뉴 문구의 "1) " 접두어를 뗀다.
fn strip_menu_number(label: &str) -> &str {
    label
        .split_once(") ")
        .map_or(label, |(_, rest)| rest)
}

/// 분류 선택과 분류별 입력 위젯. `id_salt`로 같은 화면의 폼끼리 위젯 id를 구분한다.
fn component_form(ui: &mut egui::Ui, tr: &Translator, draft: &mut ComponentDraft, id_salt: &str) {
    egui::Grid::new(("component_form", id_salt))
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            ui.label(tr.t(keys::COMPONENT_TYPE));
            let mut category = draft.category();
            egui::ComboBox::from_id_source(("component_category", id_salt))
                .selected_text(tr.t(category.i18n_key()))
                .show_ui(ui, |ui| {
                    for option in ComponentCategory::ALL {
                        ui.selectable_value(&mut category, option, tr.t(option.i18n_key()));
                    }
                });
            draft.set_category(category);
            ui.end_row();

            spec_fields(ui, tr, &mut draft.spec, id_salt);

            ui.label(tr.t(keys::COMPONENT_TAG));
            ui.text_edit_singleline(&mut draft.tag);
            ui.end_row();

            let mut quantity = draft.quantity();
            ui.label(tr.tf(keys::COMPONENT_QUANTITY, &[("n", quantity.to_string())]));
            if ui
                .add(egui::DragValue::new(&mut quantity).clamp_range(QUANTITY_MIN..=QUANTITY_MAX))
                .changed()
            {
                draft.set_quantity(quantity);
            }
            ui.end_row();

            ui.label(tr.t(keys::COMPONENT_INFO));
            ui.text_edit_multiline(&mut draft.additional_info);
            ui.end_row();
        });
}

fn spec_fields(ui: &mut egui::Ui, tr: &Translator, spec: &mut ComponentSpec, id_salt: &str) {
    let text_row = |ui: &mut egui::Ui, key: &str, value: &mut String| {
        ui.label(tr.t(key));
        ui.text_edit_singleline(value);
        ui.end_row();
    };
    match spec {
        ComponentSpec::Breaker { amps, curve } => {
            ui.label(tr.t(keys::COMPONENT_AMPS));
            ui.add(egui::DragValue::new(amps).clamp_range(AMP_OPTIONS).suffix(" A"));
            ui.end_row();
            ui.label(tr.t(keys::COMPONENT_CURVE));
            ui.horizontal(|ui| {
                for option in BreakerCurve::ALL {
                    ui.selectable_value(curve, option, option.letter());
                }
            });
            ui.end_row();
        }
        ComponentSpec::Contactor { poles, amps } => {
            ui.label(tr.t(keys::COMPONENT_POLES));
            ui.add(egui::DragValue::new(poles).clamp_range(POLE_OPTIONS));
            ui.end_row();
            ui.label(tr.t(keys::COMPONENT_AMPS));
            ui.add(egui::DragValue::new(amps).clamp_range(AMP_OPTIONS).suffix(" A"));
            ui.end_row();
        }
        ComponentSpec::ThermalProtection { amps } => {
            ui.label(tr.t(keys::COMPONENT_THERMAL_SETTING));
            ui.add(egui::DragValue::new(amps).clamp_range(AMP_OPTIONS).suffix(" A"));
            ui.end_row();
        }
        ComponentSpec::Transformer { watts } => {
            ui.label(tr.t(keys::COMPONENT_TRANSFORMER_POWER));
            egui::ComboBox::from_id_source(("transformer_watts", id_salt))
                .selected_text(format!("{watts} W"))
                .show_ui(ui, |ui| {
                    for option in transformer_watt_options() {
                        ui.selectable_value(watts, option, format!("{option} W"));
                    }
                });
            ui.end_row();
        }
        ComponentSpec::BoardSocket { option_note } => {
            text_row(ui, keys::COMPONENT_SOCKET_OPTION, option_note);
        }
        ComponentSpec::SwitchPositions { positions } => {
            ui.label(tr.t(keys::COMPONENT_SWITCH_POSITIONS));
            ui.add(egui::DragValue::new(positions).clamp_range(SWITCH_POSITION_OPTIONS));
            ui.end_row();
        }
        ComponentSpec::Relay { voltage, coil } => {
            ui.label(tr.t(keys::COMPONENT_RELAY_VOLTAGE));
            egui::ComboBox::from_id_source(("relay_voltage", id_salt))
                .selected_text(format!("{voltage} V"))
                .show_ui(ui, |ui| {
                    for option in RELAY_VOLTAGE_OPTIONS {
                        ui.selectable_value(voltage, option, format!("{option} V"));
                    }
                });
            ui.end_row();
            ui.label(tr.t(keys::COMPONENT_RELAY_TYPE));
            ui.horizontal(|ui| {
                for option in RelayCoilType::ALL {
                    ui.selectable_value(coil, option, option.label());
                }
            });
            ui.end_row();
        }
        ComponentSpec::KwhMeter {
            configuration,
            option_note,
        } => {
            ui.label(tr.t(keys::COMPONENT_KWH_OPTION));
            ui.horizontal(|ui| {
                ui.selectable_value(
                    configuration,
                    KwhConfiguration::SinglePhase,
                    tr.t(keys::COMPONENT_KWH_SINGLE),
                );
                ui.selectable_value(
                    configuration,
                    KwhConfiguration::ThreePhase,
                    tr.t(keys::COMPONENT_KWH_THREE),
                );
            });
            ui.end_row();
            text_row(ui, keys::COMPONENT_OPTION_NOTE, option_note);
        }
        ComponentSpec::PlcCard {
            brand,
            model,
            option_note,
        } => {
            text_row(ui, keys::COMPONENT_PLC_BRAND, brand);
            text_row(ui, keys::COMPONENT_PLC_TYPE, model);
            text_row(ui, keys::COMPONENT_OPTION_NOTE, option_note);
        }
        ComponentSpec::CircuitTerminal {
            terminal_type,
            option_note,
        } => {
            text_row(ui, keys::COMPONENT_TERMINAL_TYPE, terminal_type);
            text_row(ui, keys::COMPONENT_OPTION_NOTE, option_note);
        }
        ComponentSpec::Custom { label, option_note } => {
            text_row(ui, keys::COMPONENT_CUSTOM_LABEL, label);
            text_row(ui, keys::COMPONENT_OPTION_NOTE, option_note);
        }
    }
}
