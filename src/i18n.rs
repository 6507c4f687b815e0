use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";

    pub const TAB_CALCULATORS: &str = "tab.calculators";
    pub const TAB_PROJECTS: &str = "tab.projects";
    pub const TAB_REFERENCE: &str = "tab.reference";
    pub const TAB_SETTINGS: &str = "tab.settings";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_OHMS: &str = "main_menu.ohms";
    pub const MAIN_MENU_POWER: &str = "main_menu.power";
    pub const MAIN_MENU_WATT: &str = "main_menu.watt";
    pub const MAIN_MENU_DROP: &str = "main_menu.drop";
    pub const MAIN_MENU_PROJECTS: &str = "main_menu.projects";
    pub const MAIN_MENU_REFERENCE: &str = "main_menu.reference";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const SECTION_RESULTS: &str = "section.results";

    pub const FIELD_VOLTAGE: &str = "field.voltage";
    pub const FIELD_CURRENT: &str = "field.current";
    pub const FIELD_RESISTANCE: &str = "field.resistance";
    pub const FIELD_POWER: &str = "field.power";
    pub const FIELD_LENGTH: &str = "field.length";
    pub const FIELD_LOAD_CURRENT: &str = "field.load_current";
    pub const FIELD_SUPPLY_VOLTAGE: &str = "field.supply_voltage";
    pub const FIELD_CONDUCTOR_AREA: &str = "field.conductor_area";
    pub const FIELD_POWER_FACTOR: &str = "field.power_factor";
    pub const FIELD_PHASE: &str = "field.phase";
    pub const PHASE_SINGLE: &str = "phase.single";
    pub const PHASE_THREE: &str = "phase.three";

    pub const OHMS_HEADING: &str = "ohms.heading";
    pub const OHMS_PROMPT: &str = "ohms.prompt";
    pub const OHMS_VALIDATION: &str = "ohms.validation";
    pub const OHMS_BUTTON: &str = "ohms.button";
    pub const OHMS_RESULT_VOLTAGE: &str = "ohms.result.voltage";
    pub const OHMS_RESULT_CURRENT: &str = "ohms.result.current";
    pub const OHMS_RESULT_RESISTANCE: &str = "ohms.result.resistance";
    pub const OHMS_RESULT_POWER: &str = "ohms.result.power";

    pub const POWER_HEADING: &str = "power.heading";
    pub const POWER_PROMPT: &str = "power.prompt";
    pub const POWER_VALIDATION: &str = "power.validation";
    pub const POWER_BUTTON: &str = "power.button";
    pub const POWER_RESULT_POWER: &str = "power.result.power";
    pub const POWER_RESULT_BREAKER: &str = "power.result.breaker";
    pub const POWER_RESULT_APPARENT: &str = "power.result.apparent";

    pub const WATT_HEADING: &str = "watt.heading";
    pub const WATT_PROMPT: &str = "watt.prompt";
    pub const WATT_VALIDATION: &str = "watt.validation";
    pub const WATT_BUTTON: &str = "watt.button";
    pub const WATT_RESULT_REAL: &str = "watt.result.real";
    pub const WATT_RESULT_PF: &str = "watt.result.pf";

    pub const DROP_HEADING: &str = "drop.heading";
    pub const DROP_PROMPT: &str = "drop.prompt";
    pub const DROP_VALIDATION: &str = "drop.validation";
    pub const DROP_BUTTON: &str = "drop.button";
    pub const DROP_RESULT_VOLTAGE: &str = "drop.result.voltage";
    pub const DROP_RESULT_PERCENT: &str = "drop.result.percent";
    pub const DROP_RESULT_RESISTANCE: &str = "drop.result.resistance";

    pub const REFERENCE_HEADING: &str = "reference.heading";
    pub const REFERENCE_QUICK: &str = "reference.quick";
    pub const REFERENCE_TIPS: &str = "reference.tips";
    pub const REFERENCE_COPPER: &str = "reference.copper";
    pub const REFERENCE_PF_MIN: &str = "reference.pf_min";
    pub const REFERENCE_PF_MAX: &str = "reference.pf_max";
    pub const REFERENCE_MULTIPLIER: &str = "reference.multiplier";
    pub const REFERENCE_TIP_OHMS: &str = "reference.tip.ohms";
    pub const REFERENCE_TIP_BREAKER: &str = "reference.tip.breaker";
    pub const REFERENCE_TIP_DROP: &str = "reference.tip.drop";

    pub const PROJECTS_HEADING: &str = "projects.heading";
    pub const PROJECTS_EXISTING: &str = "projects.existing";
    pub const PROJECTS_NEW: &str = "projects.new";
    pub const PROJECTS_EMPTY: &str = "projects.empty";
    pub const PROJECT_NAME: &str = "projects.name";
    pub const PROJECT_VOLTAGE: &str = "projects.voltage";
    pub const PROJECT_NOTES: &str = "projects.notes";
    pub const PROJECT_ADD: &str = "projects.add";
    pub const PROJECT_ADDED: &str = "projects.added";
    pub const PROJECT_DETAILS: &str = "projects.details";
    pub const PROJECT_PROGRESS: &str = "projects.progress";
    pub const PROJECTS_EDIT_START: &str = "projects.edit.start";
    pub const PROJECTS_EDIT_DONE: &str = "projects.edit.done";
    pub const PROJECTS_SELECT_START: &str = "projects.select.start";
    pub const PROJECTS_SELECT_DONE: &str = "projects.select.done";
    pub const PROJECTS_DELETE_SELECTED: &str = "projects.delete_selected";
    pub const PROJECTS_DELETED: &str = "projects.deleted";
    pub const PROJECTS_EXPORT: &str = "projects.export";
    pub const PROJECTS_IMPORT: &str = "projects.import";
    pub const PROJECTS_EXPORTED: &str = "projects.exported";
    pub const PROJECTS_IMPORTED: &str = "projects.imported";
    pub const PROJECTS_MENU_OPTIONS: &str = "projects.menu_options";
    pub const PROMPT_PROJECT_NUMBER: &str = "prompt.project_number";
    pub const PROMPT_NUMBERS: &str = "prompt.numbers";
    pub const PROJECT_DETAIL_OPTIONS: &str = "projects.detail_options";
    pub const PROJECT_NOT_ADDED: &str = "projects.not_added";

    pub const PROJECT_COMPONENTS: &str = "components.heading";
    pub const PROJECT_COMPONENTS_EMPTY: &str = "components.empty";
    pub const COMPONENT_ADD_TITLE: &str = "components.add_title";
    pub const COMPONENT_TYPE: &str = "components.type";
    pub const COMPONENT_TAG: &str = "components.tag";
    pub const COMPONENT_QUANTITY: &str = "components.quantity";
    pub const COMPONENT_INFO: &str = "components.info";
    pub const COMPONENT_SAVE: &str = "components.save";
    pub const COMPONENT_NOT_SAVED: &str = "components.not_saved";
    pub const COMPONENT_QUICK_ADD: &str = "components.quick_add";
    pub const COMPONENT_QUICK_ADD_PLACEHOLDER: &str = "components.quick_add_placeholder";
    pub const COMPONENT_AMPS: &str = "components.amps";
    pub const COMPONENT_CURVE: &str = "components.curve";
    pub const COMPONENT_POLES: &str = "components.poles";
    pub const COMPONENT_THERMAL_SETTING: &str = "components.thermal_setting";
    pub const COMPONENT_TRANSFORMER_POWER: &str = "components.transformer_power";
    pub const COMPONENT_SOCKET_OPTION: &str = "components.socket_option";
    pub const COMPONENT_SWITCH_POSITIONS: &str = "components.switch_positions";
    pub const COMPONENT_RELAY_VOLTAGE: &str = "components.relay_voltage";
    pub const COMPONENT_RELAY_TYPE: &str = "components.relay_type";
    pub const COMPONENT_KWH_OPTION: &str = "components.kwh_option";
    pub const COMPONENT_KWH_SINGLE: &str = "components.kwh_single";
    pub const COMPONENT_KWH_THREE: &str = "components.kwh_three";
    pub const COMPONENT_PLC_BRAND: &str = "components.plc_brand";
    pub const COMPONENT_PLC_TYPE: &str = "components.plc_type";
    pub const COMPONENT_TERMINAL_TYPE: &str = "components.terminal_type";
    pub const COMPONENT_CUSTOM_LABEL: &str = "components.custom_label";
    pub const COMPONENT_OPTION_NOTE: &str = "components.option_note";
    pub const ACTION_DELETE: &str = "action.delete";

    pub const CATEGORY_BREAKER: &str = "category.breaker";
    pub const CATEGORY_CONTACTOR: &str = "category.contactor";
    pub const CATEGORY_THERMAL: &str = "category.thermal";
    pub const CATEGORY_TRANSFORMER: &str = "category.transformer";
    pub const CATEGORY_BOARD_SOCKET: &str = "category.board_socket";
    pub const CATEGORY_SWITCH: &str = "category.switch";
    pub const CATEGORY_RELAY: &str = "category.relay";
    pub const CATEGORY_KWH: &str = "category.kwh";
    pub const CATEGORY_PLC: &str = "category.plc";
    pub const CATEGORY_TERMINAL: &str = "category.terminal";
    pub const CATEGORY_CUSTOM: &str = "category.custom";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_APPEARANCE: &str = "settings.appearance";
    pub const SETTINGS_THEME_COLOR: &str = "settings.theme_color";
    pub const SETTINGS_LANGUAGE: &str = "settings.language";
    pub const SETTINGS_LANGUAGE_DESCRIPTION: &str = "settings.language_description";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const APPEARANCE_SYSTEM: &str = "appearance.system";
    pub const APPEARANCE_LIGHT: &str = "appearance.light";
    pub const APPEARANCE_DARK: &str = "appearance.dark";
    pub const LANGUAGE_SYSTEM: &str = "language.system";
    pub const LANGUAGE_ENGLISH: &str = "language.english";
    pub const LANGUAGE_DUTCH: &str = "language.dutch";
    pub const THEME_BLUE: &str = "theme.blue";
    pub const THEME_GREEN: &str = "theme.green";
    pub const THEME_ORANGE: &str = "theme.orange";
    pub const THEME_INDIGO: &str = "theme.indigo";
    pub const THEME_PURPLE: &str = "theme.purple";
    pub const THEME_PINK: &str = "theme.pink";
    pub const THEME_RED: &str = "theme.red";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Nl,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("nl") {
            Language::Nl
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/nl)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.as_str();
        }
        let builtin = match self.lang {
            Language::Nl => nl(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        builtin.unwrap_or("[missing translation]")
    }

    /// `{name}` 자리표시자를 채운 번역 문자열.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "system" | "" => None,
        other if other.starts_with("nl") => Some("nl".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "nl" => Some("nl".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 중첩 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

/// 중첩 테이블을 점(.)으로 이은 키의 플랫 맵으로 편다.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Goodbye.",
        APP_TITLE => "Power Plan",
        TAB_CALCULATORS => "Calculators",
        TAB_PROJECTS => "Projects",
        TAB_REFERENCE => "Reference",
        TAB_SETTINGS => "Settings",
        MAIN_MENU_TITLE => "\n=== Power Plan ===",
        MAIN_MENU_OHMS => "1) Ohm's law",
        MAIN_MENU_POWER => "2) Power estimate",
        MAIN_MENU_WATT => "3) Watt calculator",
        MAIN_MENU_DROP => "4) Voltage drop",
        MAIN_MENU_PROJECTS => "5) Projects",
        MAIN_MENU_REFERENCE => "6) Reference",
        MAIN_MENU_SETTINGS => "7) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        SECTION_RESULTS => "Results",
        FIELD_VOLTAGE => "Voltage (V)",
        FIELD_CURRENT => "Current (A)",
        FIELD_RESISTANCE => "Resistance (Ω)",
        FIELD_POWER => "Power (W)",
        FIELD_LENGTH => "Length (m)",
        FIELD_LOAD_CURRENT => "Load current (A)",
        FIELD_SUPPLY_VOLTAGE => "Supply voltage (V)",
        FIELD_CONDUCTOR_AREA => "Conductor area: {area} mm²",
        FIELD_POWER_FACTOR => "Power factor",
        FIELD_PHASE => "Phase",
        PHASE_SINGLE => "Single-phase",
        PHASE_THREE => "Three-phase",
        OHMS_HEADING => "\n-- Ohm's law --",
        OHMS_PROMPT => "Provide any two values to solve the rest.",
        OHMS_VALIDATION => "Enter at least two values.",
        OHMS_BUTTON => "Calculate",
        OHMS_RESULT_VOLTAGE => "Voltage: {value}",
        OHMS_RESULT_CURRENT => "Current: {value}",
        OHMS_RESULT_RESISTANCE => "Resistance: {value}",
        OHMS_RESULT_POWER => "Power: {value}",
        POWER_HEADING => "\n-- Power estimate --",
        POWER_PROMPT => "Enter circuit values to estimate the load.",
        POWER_VALIDATION => "Enter a valid voltage and current.",
        POWER_BUTTON => "Estimate power",
        POWER_RESULT_POWER => "Real power: {watts} W ({kw} kW)",
        POWER_RESULT_BREAKER => "Suggested breaker: {amps} A",
        POWER_RESULT_APPARENT => "Apparent power: {va} VA",
        WATT_HEADING => "\n-- Watt calculator --",
        WATT_PROMPT => "Enter voltage and current to calculate watts.",
        WATT_VALIDATION => "Enter a valid voltage and current.",
        WATT_BUTTON => "Calculate watts",
        WATT_RESULT_REAL => "Real power: {watts} W ({kw} kW)",
        WATT_RESULT_PF => "Assuming power factor {pf}",
        DROP_HEADING => "\n-- Voltage drop --",
        DROP_PROMPT => "Enter the cable run to estimate the drop.",
        DROP_VALIDATION => "Enter a valid length, current and supply voltage.",
        DROP_BUTTON => "Estimate drop",
        DROP_RESULT_VOLTAGE => "Voltage drop: {volts} V",
        DROP_RESULT_PERCENT => "Drop: {percent} %",
        DROP_RESULT_RESISTANCE => "Loop resistance: {ohms} Ω",
        REFERENCE_HEADING => "\n-- Reference --",
        REFERENCE_QUICK => "Quick constants",
        REFERENCE_TIPS => "Usage tips",
        REFERENCE_COPPER => "Copper resistivity at 20 °C",
        REFERENCE_PF_MIN => "Lowest power factor used",
        REFERENCE_PF_MAX => "Highest power factor used",
        REFERENCE_MULTIPLIER => "Three-phase multiplier (√3)",
        REFERENCE_TIP_OHMS => "Ohm's law needs any two known values.",
        REFERENCE_TIP_BREAKER => "Size breakers at 125% of the continuous load current.",
        REFERENCE_TIP_DROP => "Keep voltage drop below 3% for lighting and 5% for other circuits.",
        PROJECTS_HEADING => "\n-- Projects --",
        PROJECTS_EXISTING => "Projects",
        PROJECTS_NEW => "New project",
        PROJECTS_EMPTY => "No projects yet.",
        PROJECT_NAME => "Project name",
        PROJECT_VOLTAGE => "Voltage",
        PROJECT_NOTES => "Notes",
        PROJECT_ADD => "Add project",
        PROJECT_ADDED => "Project added.",
        PROJECT_NOT_ADDED => "A project needs a name.",
        PROJECT_DETAILS => "Project details",
        PROJECT_PROGRESS => "{done}/{total} acquired",
        PROJECTS_EDIT_START => "Edit",
        PROJECTS_EDIT_DONE => "Done",
        PROJECTS_SELECT_START => "Select",
        PROJECTS_SELECT_DONE => "Cancel selection",
        PROJECTS_DELETE_SELECTED => "Delete selected",
        PROJECTS_DELETED => "{count} item(s) deleted.",
        PROJECTS_EXPORT => "Export…",
        PROJECTS_IMPORT => "Import…",
        PROJECTS_EXPORTED => "Projects exported to {path}",
        PROJECTS_IMPORTED => "{count} project(s) imported.",
        PROJECTS_MENU_OPTIONS => "1) List  2) Add  3) Open  4) Delete  0) Back",
        PROMPT_PROJECT_NUMBER => "Project number: ",
        PROMPT_NUMBERS => "Numbers (space separated): ",
        PROJECT_DETAIL_OPTIONS => "1) Add component  2) Toggle acquired  3) Delete components  4) Edit details  0) Back",
        PROJECT_COMPONENTS => "Components",
        PROJECT_COMPONENTS_EMPTY => "No components in this project.",
        COMPONENT_ADD_TITLE => "Add component",
        COMPONENT_TYPE => "Type",
        COMPONENT_TAG => "Tag",
        COMPONENT_QUANTITY => "Quantity: {n}",
        COMPONENT_INFO => "Additional info",
        COMPONENT_SAVE => "Save component",
        COMPONENT_NOT_SAVED => "Required fields are missing; component not saved.",
        COMPONENT_QUICK_ADD => "Add item",
        COMPONENT_QUICK_ADD_PLACEHOLDER => "Item name",
        COMPONENT_AMPS => "Rating (A)",
        COMPONENT_CURVE => "Curve",
        COMPONENT_POLES => "Poles",
        COMPONENT_THERMAL_SETTING => "Setting (A)",
        COMPONENT_TRANSFORMER_POWER => "Power (W)",
        COMPONENT_SOCKET_OPTION => "Socket option",
        COMPONENT_SWITCH_POSITIONS => "Positions",
        COMPONENT_RELAY_VOLTAGE => "Coil voltage",
        COMPONENT_RELAY_TYPE => "Coil type",
        COMPONENT_KWH_OPTION => "Configuration",
        COMPONENT_KWH_SINGLE => "Single Phase",
        COMPONENT_KWH_THREE => "Three Phase",
        COMPONENT_PLC_BRAND => "PLC brand",
        COMPONENT_PLC_TYPE => "PLC type",
        COMPONENT_TERMINAL_TYPE => "Terminal type",
        COMPONENT_CUSTOM_LABEL => "Label",
        COMPONENT_OPTION_NOTE => "Option note",
        ACTION_DELETE => "Delete",
        CATEGORY_BREAKER => "Breaker",
        CATEGORY_CONTACTOR => "Contactor",
        CATEGORY_THERMAL => "Thermal Protection",
        CATEGORY_TRANSFORMER => "Transformer",
        CATEGORY_BOARD_SOCKET => "Board Socket",
        CATEGORY_SWITCH => "Switch",
        CATEGORY_RELAY => "Relay",
        CATEGORY_KWH => "kWh Meter",
        CATEGORY_PLC => "PLC Card",
        CATEGORY_TERMINAL => "Circuit Terminal",
        CATEGORY_CUSTOM => "Custom",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_OPTIONS => "1) Appearance  2) Theme colour  3) Language  0) Back",
        SETTINGS_APPEARANCE => "Appearance",
        SETTINGS_THEME_COLOR => "Theme colour",
        SETTINGS_LANGUAGE => "Language",
        SETTINGS_LANGUAGE_DESCRIPTION => "Language changes apply on the next start.",
        SETTINGS_SAVED => "Settings saved.",
        APPEARANCE_SYSTEM => "System",
        APPEARANCE_LIGHT => "Light",
        APPEARANCE_DARK => "Dark",
        LANGUAGE_SYSTEM => "Device language",
        LANGUAGE_ENGLISH => "English",
        LANGUAGE_DUTCH => "Nederlands",
        THEME_BLUE => "Blue",
        THEME_GREEN => "Green",
        THEME_ORANGE => "Orange",
        THEME_INDIGO => "Indigo",
        THEME_PURPLE => "Purple",
        THEME_PINK => "Pink",
        THEME_RED => "Red",
        _ => return None,
    })
}

fn nl(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Tot ziens.",
        TAB_CALCULATORS => "Rekenhulpen",
        TAB_PROJECTS => "Projecten",
        TAB_REFERENCE => "Naslag",
        TAB_SETTINGS => "Instellingen",
        MAIN_MENU_OHMS => "1) Wet van Ohm",
        MAIN_MENU_POWER => "2) Vermogensschatting",
        MAIN_MENU_WATT => "3) Wattberekening",
        MAIN_MENU_DROP => "4) Spanningsval",
        MAIN_MENU_PROJECTS => "5) Projecten",
        MAIN_MENU_REFERENCE => "6) Naslag",
        MAIN_MENU_SETTINGS => "7) Instellingen",
        MAIN_MENU_EXIT => "0) Afsluiten",
        PROMPT_MENU_SELECT => "Kies menu: ",
        PROMPT_SELECT => "Kies: ",
        INVALID_SELECTION_RETRY => "Ongeldige invoer. Probeer opnieuw.",
        ERROR_INVALID_NUMBER => "Voer een getal in.",
        SECTION_RESULTS => "Resultaat",
        FIELD_VOLTAGE => "Spanning (V)",
        FIELD_CURRENT => "Stroom (A)",
        FIELD_RESISTANCE => "Weerstand (Ω)",
        FIELD_POWER => "Vermogen (W)",
        FIELD_LENGTH => "Lengte (m)",
        FIELD_LOAD_CURRENT => "Belastingsstroom (A)",
        FIELD_SUPPLY_VOLTAGE => "Voedingsspanning (V)",
        FIELD_CONDUCTOR_AREA => "Doorsnede: {area} mm²",
        FIELD_POWER_FACTOR => "Arbeidsfactor",
        FIELD_PHASE => "Fase",
        PHASE_SINGLE => "Eenfasig",
        PHASE_THREE => "Driefasig",
        OHMS_HEADING => "\n-- Wet van Ohm --",
        OHMS_PROMPT => "Vul twee waarden in om de rest te berekenen.",
        OHMS_VALIDATION => "Vul minstens twee waarden in.",
        OHMS_BUTTON => "Bereken",
        OHMS_RESULT_VOLTAGE => "Spanning: {value}",
        OHMS_RESULT_CURRENT => "Stroom: {value}",
        OHMS_RESULT_RESISTANCE => "Weerstand: {value}",
        OHMS_RESULT_POWER => "Vermogen: {value}",
        POWER_HEADING => "\n-- Vermogensschatting --",
        POWER_PROMPT => "Vul de kringgegevens in om de belasting te schatten.",
        POWER_VALIDATION => "Vul een geldige spanning en stroom in.",
        POWER_BUTTON => "Schat vermogen",
        POWER_RESULT_POWER => "Werkelijk vermogen: {watts} W ({kw} kW)",
        POWER_RESULT_BREAKER => "Aanbevolen automaat: {amps} A",
        POWER_RESULT_APPARENT => "Schijnbaar vermogen: {va} VA",
        WATT_HEADING => "\n-- Wattberekening --",
        WATT_PROMPT => "Vul spanning en stroom in om het vermogen te berekenen.",
        WATT_VALIDATION => "Vul een geldige spanning en stroom in.",
        WATT_BUTTON => "Bereken watt",
        WATT_RESULT_REAL => "Werkelijk vermogen: {watts} W ({kw} kW)",
        WATT_RESULT_PF => "Bij arbeidsfactor {pf}",
        DROP_HEADING => "\n-- Spanningsval --",
        DROP_PROMPT => "Vul het kabeltraject in om de spanningsval te schatten.",
        DROP_VALIDATION => "Vul een geldige lengte, stroom en voedingsspanning in.",
        DROP_BUTTON => "Schat spanningsval",
        DROP_RESULT_VOLTAGE => "Spanningsval: {volts} V",
        DROP_RESULT_PERCENT => "Val: {percent} %",
        DROP_RESULT_RESISTANCE => "Lusweerstand: {ohms} Ω",
        REFERENCE_HEADING => "\n-- Naslag --",
        REFERENCE_QUICK => "Snelle constanten",
        REFERENCE_TIPS => "Tips",
        REFERENCE_COPPER => "Soortelijke weerstand koper bij 20 °C",
        REFERENCE_PF_MIN => "Laagste gebruikte arbeidsfactor",
        REFERENCE_PF_MAX => "Hoogste gebruikte arbeidsfactor",
        REFERENCE_MULTIPLIER => "Driefasefactor (√3)",
        REFERENCE_TIP_OHMS => "De wet van Ohm heeft twee bekende waarden nodig.",
        REFERENCE_TIP_BREAKER => "Kies automaten op 125% van de continue belastingsstroom.",
        REFERENCE_TIP_DROP => "Houd de spanningsval onder 3% voor verlichting en 5% voor andere kringen.",
        PROJECTS_HEADING => "\n-- Projecten --",
        PROJECTS_EXISTING => "Projecten",
        PROJECTS_NEW => "Nieuw project",
        PROJECTS_EMPTY => "Nog geen projecten.",
        PROJECT_NAME => "Projectnaam",
        PROJECT_VOLTAGE => "Spanning",
        PROJECT_NOTES => "Notities",
        PROJECT_ADD => "Project toevoegen",
        PROJECT_ADDED => "Project toegevoegd.",
        PROJECT_NOT_ADDED => "Een project heeft een naam nodig.",
        PROJECT_DETAILS => "Projectgegevens",
        PROJECT_PROGRESS => "{done}/{total} aanwezig",
        PROJECTS_EDIT_START => "Bewerken",
        PROJECTS_EDIT_DONE => "Klaar",
        PROJECTS_SELECT_START => "Selecteren",
        PROJECTS_SELECT_DONE => "Selectie annuleren",
        PROJECTS_DELETE_SELECTED => "Selectie verwijderen",
        PROJECTS_DELETED => "{count} item(s) verwijderd.",
        PROJECTS_EXPORT => "Exporteren…",
        PROJECTS_IMPORT => "Importeren…",
        PROJECTS_EXPORTED => "Projecten geëxporteerd naar {path}",
        PROJECTS_IMPORTED => "{count} project(en) geïmporteerd.",
        PROJECTS_MENU_OPTIONS => "1) Lijst  2) Toevoegen  3) Openen  4) Verwijderen  0) Terug",
        PROMPT_PROJECT_NUMBER => "Projectnummer: ",
        PROMPT_NUMBERS => "Nummers (gescheiden door spaties): ",
        PROJECT_DETAIL_OPTIONS => "1) Component toevoegen  2) Aanwezig wisselen  3) Componenten verwijderen  4) Gegevens bewerken  0) Terug",
        PROJECT_COMPONENTS => "Componenten",
        PROJECT_COMPONENTS_EMPTY => "Geen componenten in dit project.",
        COMPONENT_ADD_TITLE => "Component toevoegen",
        COMPONENT_TYPE => "Type",
        COMPONENT_TAG => "Label",
        COMPONENT_QUANTITY => "Aantal: {n}",
        COMPONENT_INFO => "Extra informatie",
        COMPONENT_SAVE => "Component opslaan",
        COMPONENT_NOT_SAVED => "Verplichte velden ontbreken; component niet opgeslagen.",
        COMPONENT_QUICK_ADD => "Item toevoegen",
        COMPONENT_QUICK_ADD_PLACEHOLDER => "Naam van item",
        COMPONENT_AMPS => "Nominale stroom (A)",
        COMPONENT_CURVE => "Karakteristiek",
        COMPONENT_POLES => "Polen",
        COMPONENT_THERMAL_SETTING => "Instelling (A)",
        COMPONENT_TRANSFORMER_POWER => "Vermogen (W)",
        COMPONENT_SOCKET_OPTION => "Type stopcontact",
        COMPONENT_SWITCH_POSITIONS => "Standen",
        COMPONENT_RELAY_VOLTAGE => "Spoelspanning",
        COMPONENT_RELAY_TYPE => "Spoeltype",
        COMPONENT_KWH_OPTION => "Configuratie",
        COMPONENT_KWH_SINGLE => "Eenfasig",
        COMPONENT_KWH_THREE => "Driefasig",
        COMPONENT_PLC_BRAND => "PLC-merk",
        COMPONENT_PLC_TYPE => "PLC-type",
        COMPONENT_TERMINAL_TYPE => "Type klem",
        COMPONENT_CUSTOM_LABEL => "Omschrijving",
        COMPONENT_OPTION_NOTE => "Optie",
        ACTION_DELETE => "Verwijderen",
        CATEGORY_BREAKER => "Automaat",
        CATEGORY_CONTACTOR => "Magneetschakelaar",
        CATEGORY_THERMAL => "Thermische beveiliging",
        CATEGORY_TRANSFORMER => "Transformator",
        CATEGORY_BOARD_SOCKET => "Bordcontactdoos",
        CATEGORY_SWITCH => "Schakelaar",
        CATEGORY_RELAY => "Relais",
        CATEGORY_KWH => "kWh-meter",
        CATEGORY_PLC => "PLC-kaart",
        CATEGORY_TERMINAL => "Klemmen",
        CATEGORY_CUSTOM => "Eigen item",
        SETTINGS_HEADING => "\n-- Instellingen --",
        SETTINGS_OPTIONS => "1) Weergave  2) Themakleur  3) Taal  0) Terug",
        SETTINGS_APPEARANCE => "Weergave",
        SETTINGS_THEME_COLOR => "Themakleur",
        SETTINGS_LANGUAGE => "Taal",
        SETTINGS_LANGUAGE_DESCRIPTION => "Een taalwijziging geldt bij de volgende start.",
        SETTINGS_SAVED => "Instellingen opgeslagen.",
        APPEARANCE_SYSTEM => "Systeem",
        APPEARANCE_LIGHT => "Licht",
        APPEARANCE_DARK => "Donker",
        LANGUAGE_SYSTEM => "Taal van het apparaat",
        THEME_BLUE => "Blauw",
        THEME_GREEN => "Groen",
        THEME_ORANGE => "Oranje",
        THEME_INDIGO => "Indigo",
        THEME_PURPLE => "Paars",
        THEME_PINK => "Roze",
        THEME_RED => "Rood",
        _ => return None,
    })
}
