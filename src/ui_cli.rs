use std::collections::HashSet;
use std::io::{self, Write};

use uuid::Uuid;

use crate::app::AppError;
use crate::calculators::{
    self, clamp_power_factor, ElectricalQuantitySet, Phase, CONDUCTOR_AREA_MAX,
    CONDUCTOR_AREA_MIN, DEFAULT_CONDUCTOR_AREA, DEFAULT_POWER_FACTOR,
};
use crate::config::{AppearanceMode, Config, LanguageOption, ThemeColor};
use crate::i18n::{keys, Translator};
use crate::projects::{
    component_groups, transformer_watt_options, BreakerCurve, ComponentCategory, ComponentDraft,
    ComponentSpec, KwhConfiguration, Project, ProjectEdit, ProjectStore, RelayCoilType,
    AMP_OPTIONS, POLE_OPTIONS, RELAY_VOLTAGE_OPTIONS, SWITCH_POSITION_OPTIONS,
};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    OhmsLaw,
    Power,
    Watt,
    VoltageDrop,
    Projects,
    Reference,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_OHMS,
        keys::MAIN_MENU_POWER,
        keys::MAIN_MENU_WATT,
        keys::MAIN_MENU_DROP,
        keys::MAIN_MENU_PROJECTS,
        keys::MAIN_MENU_REFERENCE,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::OhmsLaw),
            "2" => return Ok(MenuChoice::Power),
            "3" => return Ok(MenuChoice::Watt),
            "4" => return Ok(MenuChoice::VoltageDrop),
            "5" => return Ok(MenuChoice::Projects),
            "6" => return Ok(MenuChoice::Reference),
            "7" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 옴의 법칙 메뉴. 빈 칸으로 둔 값은 모르는 값으로 본다.
pub fn handle_ohms_law(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::OHMS_HEADING));
    println!("{}", tr.t(keys::OHMS_PROMPT));
    let voltage = read_field(tr, keys::FIELD_VOLTAGE)?;
    let current = read_field(tr, keys::FIELD_CURRENT)?;
    let resistance = read_field(tr, keys::FIELD_RESISTANCE)?;
    let power = read_field(tr, keys::FIELD_POWER)?;
    let set = ElectricalQuantitySet::from_text(&voltage, &current, &resistance, &power);
    match calculators::solve(&set) {
        Ok(solution) => print_lines(&report::ohms_lines(tr, &solution.formatted())),
        Err(e) => println!("{}", report::calc_error_message(tr, &e, keys::OHMS_VALIDATION)),
    }
    Ok(())
}

pub fn handle_power(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POWER_HEADING));
    println!("{}", tr.t(keys::POWER_PROMPT));
    let phase = read_phase(tr)?;
    let voltage = read_field(tr, keys::FIELD_VOLTAGE)?;
    let current = read_field(tr, keys::FIELD_CURRENT)?;
    let pf = read_power_factor(tr, DEFAULT_POWER_FACTOR)?;
    match calculators::estimate_power_from_text(&voltage, &current, phase, pf) {
        Ok(estimate) => print_lines(&report::power_lines(tr, &estimate)),
        Err(e) => println!("{}", report::calc_error_message(tr, &e, keys::POWER_VALIDATION)),
    }
    Ok(())
}

pub fn handle_watt(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WATT_HEADING));
    println!("{}", tr.t(keys::WATT_PROMPT));
    let voltage = read_field(tr, keys::FIELD_VOLTAGE)?;
    let current = read_field(tr, keys::FIELD_CURRENT)?;
    let pf = read_power_factor(tr, 1.0)?;
    match calculators::compute_watts_from_text(&voltage, &current, pf) {
        Ok(estimate) => print_lines(&report::watt_lines(tr, &estimate)),
        Err(e) => println!("{}", report::calc_error_message(tr, &e, keys::WATT_VALIDATION)),
    }
    Ok(())
}

pub fn handle_voltage_drop(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::DROP_HEADING));
    println!("{}", tr.t(keys::DROP_PROMPT));
    let length = read_field(tr, keys::FIELD_LENGTH)?;
    let current = read_field(tr, keys::FIELD_LOAD_CURRENT)?;
    let supply = read_field(tr, keys::FIELD_SUPPLY_VOLTAGE)?;
    let area_label = tr.tf(
        keys::FIELD_CONDUCTOR_AREA,
        &[("area", DEFAULT_CONDUCTOR_AREA.to_string())],
    );
    let area = read_f64_or(&format!("{area_label} > "), DEFAULT_CONDUCTOR_AREA, tr)?
        .clamp(CONDUCTOR_AREA_MIN, CONDUCTOR_AREA_MAX);
    match calculators::estimate_voltage_drop_from_text(&length, &current, &supply, area) {
        Ok(estimate) => print_lines(&report::drop_lines(tr, &estimate)),
        Err(e) => println!("{}", report::calc_error_message(tr, &e, keys::DROP_VALIDATION)),
    }
    Ok(())
}

pub fn handle_reference(tr: &Translator) {
    println!("{}", tr.t(keys::REFERENCE_HEADING));
    println!("[{}]", tr.t(keys::REFERENCE_QUICK));
    print_lines(&report::reference_constant_lines(tr));
    println!("[{}]", tr.t(keys::REFERENCE_TIPS));
    for tip in report::reference_tip_lines(tr) {
        println!("- {tip}");
    }
}

/// 프로젝트 목록 메뉴.
pub fn handle_projects(tr: &Translator, store: &mut ProjectStore) -> Result<(), AppError> {
    loop {
        println!("{}", tr.t(keys::PROJECTS_HEADING));
        print_project_list(tr, store.projects());
        println!("{}", tr.t(keys::PROJECTS_MENU_OPTIONS));
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => {}
            "2" => {
                let name = read_text(tr.t(keys::PROJECT_NAME))?;
                let voltage = read_text(tr.t(keys::PROJECT_VOLTAGE))?;
                let notes = read_text(tr.t(keys::PROJECT_NOTES))?;
                match store.add_project(&name, &voltage, &notes, Vec::new())? {
                    Some(_) => println!("{}", tr.t(keys::PROJECT_ADDED)),
                    None => println!("{}", tr.t(keys::PROJECT_NOT_ADDED)),
                }
            }
            "3" => {
                if let Some(id) = pick_project(tr, store.projects())? {
                    handle_project_detail(tr, store, id)?;
                }
            }
            "4" => {
                let ids = pick_many(tr, store.projects().iter().map(|p| p.id).collect())?;
                let removed = store.delete_projects(&ids)?;
                println!(
                    "{}",
                    tr.tf(keys::PROJECTS_DELETED, &[("count", removed.to_string())])
                );
            }
            "0" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn handle_project_detail(
    tr: &Translator,
    store: &mut ProjectStore,
    project_id: Uuid,
) -> Result<(), AppError> {
    loop {
        let Some(project) = store.registry().project(project_id) else {
            return Ok(());
        };
        let order = print_project_detail(tr, project);
        println!("{}", tr.t(keys::PROJECT_DETAIL_OPTIONS));
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        match sel.trim() {
            "1" => {
                let mut draft = read_component_draft(tr)?;
                if store.add_component(project_id, &mut draft)?.is_none() {
                    println!("{}", tr.t(keys::COMPONENT_NOT_SAVED));
                }
            }
            "2" => {
                for id in pick_many(tr, order)? {
                    store.toggle_acquired(id)?;
                }
            }
            "3" => {
                let ids = pick_many(tr, order)?;
                let removed = store.delete_components(project_id, &ids)?;
                println!(
                    "{}",
                    tr.tf(keys::PROJECTS_DELETED, &[("count", removed.to_string())])
                );
            }
            "4" => {
                // 빈 입력은 기존 값을 유지한다.
                let keep = |s: String| (!s.is_empty()).then_some(s);
                let edit = ProjectEdit {
                    name: keep(read_text(tr.t(keys::PROJECT_NAME))?),
                    voltage: keep(read_text(tr.t(keys::PROJECT_VOLTAGE))?),
                    notes: keep(read_text(tr.t(keys::PROJECT_NOTES))?),
                };
                store.update_project(project_id, edit)?;
            }
            "0" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn print_project_list(tr: &Translator, projects: &[Project]) {
    if projects.is_empty() {
        println!("{}", tr.t(keys::PROJECTS_EMPTY));
        return;
    }
    for (idx, project) in projects.iter().enumerate() {
        let (done, total) = project.acquired_progress();
        let progress = tr.tf(
            keys::PROJECT_PROGRESS,
            &[("done", done.to_string()), ("total", total.to_string())],
        );
        if project.voltage.is_empty() {
            println!("{:>3}) {} ({progress})", idx + 1, project.name);
        } else {
            println!(
                "{:>3}) {} · {} ({progress})",
                idx + 1,
                project.name,
                project.voltage
            );
        }
    }
}

/// 부품을 분류별로 출력하고, 화면 번호 순서의 id 목록을 돌려준다.
fn print_project_detail(tr: &Translator, project: &Project) -> Vec<Uuid> {
    println!("\n== {} ==", project.name);
    if !project.voltage.is_empty() {
        println!("{}: {}", tr.t(keys::PROJECT_VOLTAGE), project.voltage);
    }
    if !project.notes.is_empty() {
        println!("{}: {}", tr.t(keys::PROJECT_NOTES), project.notes);
    }
    let mut order = Vec::new();
    let groups = component_groups(project);
    if groups.is_empty() {
        println!("{}", tr.t(keys::PROJECT_COMPONENTS_EMPTY));
    }
    for group in groups {
        println!("[{}]", tr.t(group.category.i18n_key()));
        for component in group.components {
            order.push(component.id);
            let mark = if component.acquired { "x" } else { " " };
            println!(
                "{:>3}) [{mark}] {} ×{}  {}",
                order.len(),
                component.name,
                component.quantity,
                component.detail_line()
            );
        }
    }
    order
}

fn pick_project(tr: &Translator, projects: &[Project]) -> Result<Option<Uuid>, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_PROJECT_NUMBER))?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| projects.get(i))
        .map(|p| p.id);
    if picked.is_none() {
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
    Ok(picked)
}

/// 공백으로 구분된 화면 번호들을 id 집합으로 바꾼다. 범위를 벗어난 번호는 무시한다.
fn pick_many(tr: &Translator, order: Vec<Uuid>) -> Result<HashSet<Uuid>, AppError> {
    let sel = read_line(tr.t(keys::PROMPT_NUMBERS))?;
    Ok(sel
        .split_whitespace()
        .filter_map(|s| s.parse::<usize>().ok())
        .filter_map(|n| n.checked_sub(1))
        .filter_map(|i| order.get(i).copied())
        .collect())
}

/// 분류를 고르고 분류별 항목을 입력받아 초안을 만든다.
fn read_component_draft(tr: &Translator) -> Result<ComponentDraft, AppError> {
    println!("{}", tr.t(keys::COMPONENT_ADD_TITLE));
    for (idx, category) in ComponentCategory::ALL.iter().enumerate() {
        println!("{:>3}) {}", idx + 1, tr.t(category.i18n_key()));
    }
    let category = loop {
        let sel = read_line(&format!("{}: ", tr.t(keys::COMPONENT_TYPE)))?;
        let picked = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| ComponentCategory::ALL.get(i).copied());
        match picked {
            Some(c) => break c,
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    };

    let mut draft = ComponentDraft::new(category);
    read_component_spec(tr, &mut draft.spec)?;
    draft.tag = read_text(tr.t(keys::COMPONENT_TAG))?;
    let quantity_label = tr.tf(keys::COMPONENT_QUANTITY, &[("n", "1".to_string())]);
    draft.set_quantity(read_u32_or(&format!("{quantity_label} > "), 1, tr)?);
    draft.additional_info = read_text(tr.t(keys::COMPONENT_INFO))?;
    Ok(draft)
}

fn read_component_spec(tr: &Translator, spec: &mut ComponentSpec) -> Result<(), AppError> {
    match spec {
        ComponentSpec::Breaker { amps, curve } => {
            *amps = read_in_range(tr, keys::COMPONENT_AMPS, *amps, &AMP_OPTIONS)?;
            let letters: Vec<&str> = BreakerCurve::ALL.iter().map(|c| c.letter()).collect();
            let sel = read_text(&format!("{} ({})", tr.t(keys::COMPONENT_CURVE), letters.join("/")))?;
            if let Some(c) = BreakerCurve::ALL
                .iter()
                .find(|c| c.letter().eq_ignore_ascii_case(&sel))
            {
                *curve = *c;
            }
        }
        ComponentSpec::Contactor { poles, amps } => {
            let p = read_in_range(tr, keys::COMPONENT_POLES, u32::from(*poles), &widen(&POLE_OPTIONS))?;
            *poles = u8::try_from(p).unwrap_or(*poles);
            *amps = read_in_range(tr, keys::COMPONENT_AMPS, *amps, &AMP_OPTIONS)?;
        }
        ComponentSpec::ThermalProtection { amps } => {
            *amps = read_in_range(tr, keys::COMPONENT_THERMAL_SETTING, *amps, &AMP_OPTIONS)?;
        }
        ComponentSpec::Transformer { watts } => {
            let options = transformer_watt_options();
            let label = format!("{} [{}]", tr.t(keys::COMPONENT_TRANSFORMER_POWER), *watts);
            let w = read_u32_or(&format!("{label} > "), *watts, tr)?;
            if options.contains(&w) {
                *watts = w;
            } else {
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            }
        }
        ComponentSpec::BoardSocket { option_note } => {
            *option_note = read_text(tr.t(keys::COMPONENT_SOCKET_OPTION))?;
        }
        ComponentSpec::SwitchPositions { positions } => {
            let p = read_in_range(
                tr,
                keys::COMPONENT_SWITCH_POSITIONS,
                u32::from(*positions),
                &widen(&SWITCH_POSITION_OPTIONS),
            )?;
            *positions = u8::try_from(p).unwrap_or(*positions);
        }
        ComponentSpec::Relay { voltage, coil } => {
            let label = format!(
                "{} {:?} [{}]",
                tr.t(keys::COMPONENT_RELAY_VOLTAGE),
                RELAY_VOLTAGE_OPTIONS,
                *voltage
            );
            let v = read_u32_or(&format!("{label} > "), *voltage, tr)?;
            if RELAY_VOLTAGE_OPTIONS.contains(&v) {
                *voltage = v;
            }
            let sel = read_text(&format!("{} (AC/DC)", tr.t(keys::COMPONENT_RELAY_TYPE)))?;
            if let Some(c) = RelayCoilType::ALL
                .iter()
                .find(|c| c.label().eq_ignore_ascii_case(&sel))
            {
                *coil = *c;
            }
        }
        ComponentSpec::KwhMeter {
            configuration,
            option_note,
        } => {
            println!(
                "1) {}  2) {}",
                tr.t(keys::COMPONENT_KWH_SINGLE),
                tr.t(keys::COMPONENT_KWH_THREE)
            );
            let sel = read_text(tr.t(keys::COMPONENT_KWH_OPTION))?;
            if sel == "2" {
                *configuration = KwhConfiguration::ThreePhase;
            }
            *option_note = read_text(tr.t(keys::COMPONENT_OPTION_NOTE))?;
        }
        ComponentSpec::PlcCard {
            brand,
            model,
            option_note,
        } => {
            *brand = read_text(tr.t(keys::COMPONENT_PLC_BRAND))?;
            *model = read_text(tr.t(keys::COMPONENT_PLC_TYPE))?;
            *option_note = read_text(tr.t(keys::COMPONENT_OPTION_NOTE))?;
        }
        ComponentSpec::CircuitTerminal {
            terminal_type,
            option_note,
        } => {
            *terminal_type = read_text(tr.t(keys::COMPONENT_TERMINAL_TYPE))?;
            *option_note = read_text(tr.t(keys::COMPONENT_OPTION_NOTE))?;
        }
        ComponentSpec::Custom { label, option_note } => {
            *label = read_text(tr.t(keys::COMPONENT_CUSTOM_LABEL))?;
            *option_note = read_text(tr.t(keys::COMPONENT_OPTION_NOTE))?;
        }
    }
    Ok(())
}

fn widen(range: &std::ops::RangeInclusive<u8>) -> std::ops::RangeInclusive<u32> {
    u32::from(*range.start())..=u32::from(*range.end())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: {} / {}: {} / {}: {}",
        tr.t(keys::SETTINGS_APPEARANCE),
        tr.t(cfg.appearance.i18n_key()),
        tr.t(keys::SETTINGS_THEME_COLOR),
        tr.t(cfg.theme_color.i18n_key()),
        tr.t(keys::SETTINGS_LANGUAGE),
        tr.t(cfg.language.i18n_key()),
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => {
            let labels: Vec<&str> = AppearanceMode::ALL.iter().map(|m| tr.t(m.i18n_key())).collect();
            if let Some(i) = pick_option(tr, &labels)? {
                cfg.appearance = AppearanceMode::ALL[i];
            }
        }
        "2" => {
            let labels: Vec<&str> = ThemeColor::ALL.iter().map(|c| tr.t(c.i18n_key())).collect();
            if let Some(i) = pick_option(tr, &labels)? {
                cfg.theme_color = ThemeColor::ALL[i];
            }
        }
        "3" => {
            let labels: Vec<&str> = LanguageOption::ALL.iter().map(|l| tr.t(l.i18n_key())).collect();
            if let Some(i) = pick_option(tr, &labels)? {
                cfg.language = LanguageOption::ALL[i];
                println!("{}", tr.t(keys::SETTINGS_LANGUAGE_DESCRIPTION));
            }
        }
        "" | "0" => {}
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn pick_option(tr: &Translator, labels: &[&str]) -> Result<Option<usize>, AppError> {
    for (idx, label) in labels.iter().enumerate() {
        println!("{:>3}) {label}", idx + 1);
    }
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let picked = sel
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|i| *i < labels.len());
    if picked.is_none() && !sel.trim().is_empty() {
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
    Ok(picked)
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

fn read_phase(tr: &Translator) -> Result<Phase, AppError> {
    println!(
        "{}: 1) {}  2) {}",
        tr.t(keys::FIELD_PHASE),
        tr.t(keys::PHASE_SINGLE),
        tr.t(keys::PHASE_THREE)
    );
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    Ok(if sel.trim() == "2" {
        Phase::Three
    } else {
        Phase::Single
    })
}

fn read_power_factor(tr: &Translator, default: f64) -> Result<f64, AppError> {
    let prompt = format!("{} [{default}] > ", tr.t(keys::FIELD_POWER_FACTOR));
    Ok(clamp_power_factor(read_f64_or(&prompt, default, tr)?))
}

fn read_field(tr: &Translator, key: &str) -> Result<String, AppError> {
    read_line(&format!("{} > ", tr.t(key)))
}

fn read_text(label: &str) -> Result<String, AppError> {
    Ok(read_line(&format!("{label} > "))?.trim().to_string())
}

fn read_in_range(
    tr: &Translator,
    key: &str,
    current: u32,
    range: &std::ops::RangeInclusive<u32>,
) -> Result<u32, AppError> {
    let prompt = format!(
        "{} ({}-{}) [{current}] > ",
        tr.t(key),
        range.start(),
        range.end()
    );
    loop {
        let v = read_u32_or(&prompt, current, tr)?;
        if range.contains(&v) {
            return Ok(v);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// 빈 입력이면 기본값을 쓴다.
fn read_f64_or(prompt: &str, default: f64, tr: &Translator) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(prompt: &str, default: u32, tr: &Translator) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
