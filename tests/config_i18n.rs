use std::fs;

use power_plan_toolbox::config::{
    load_or_default_at, AppearanceMode, Config, LanguageOption, ThemeColor,
};
use power_plan_toolbox::i18n::{self, keys, parse_toml_to_map, Language, Translator};
use power_plan_toolbox::projects::ComponentCategory;
use power_plan_toolbox::reference;

const MISSING: &str = "[missing translation]";

#[test]
fn missing_config_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default_at(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(cfg.language_code(), None);
}

#[test]
fn saved_settings_load_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        appearance: AppearanceMode::Dark,
        language: LanguageOption::Dutch,
        theme_color: ThemeColor::Orange,
        data_dir: dir.path().join("data"),
        language_pack_dir: Some("packs".into()),
    };
    cfg.save_to(&path).expect("save");
    assert_eq!(load_or_default_at(&path).expect("load"), cfg);
}

#[test]
fn partial_config_file_fills_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "appearance = \"light\"\nlanguage = \"nl\"\ntheme_color = \"pink\"\n")
        .expect("write");
    let cfg = load_or_default_at(&path).expect("load");
    assert_eq!(cfg.appearance, AppearanceMode::Light);
    assert_eq!(cfg.language_code(), Some("nl"));
    assert_eq!(cfg.theme_color, ThemeColor::Pink);
    assert_eq!(cfg.data_dir, Config::default().data_dir);
}

#[test]
fn theme_colors_have_distinct_previews() {
    let mut seen: Vec<[u8; 3]> = ThemeColor::ALL.iter().map(|c| c.rgb()).collect();
    seen.dedup();
    assert_eq!(seen.len(), 7);
    assert_eq!(ThemeColor::Blue.rgb(), [0x1E, 0x88, 0xE5]);
}

#[test]
fn dutch_falls_back_to_english() {
    let nl = Translator::new("nl");
    assert_eq!(nl.language(), Language::Nl);
    assert_eq!(nl.t(keys::TAB_PROJECTS), "Projecten");
    assert_eq!(nl.t(keys::APP_TITLE), "Power Plan");
    assert_eq!(nl.t("no.such.key"), MISSING);
    assert_eq!(Translator::new("fr").language_code(), "en");
}

#[test]
fn templates_are_filled() {
    let en = Translator::new("en");
    assert_eq!(
        en.tf(
            keys::PROJECT_PROGRESS,
            &[("done", "2".to_string()), ("total", "5".to_string())]
        ),
        "2/5 acquired"
    );
    assert_eq!(
        i18n::fill_template("{a}-{b}-{a}", &[("a", "x".to_string()), ("b", "y".to_string())]),
        "x-y-x"
    );
}

#[test]
fn language_resolution_order() {
    assert_eq!(i18n::resolve_language("nl", Some("en")), "nl");
    assert_eq!(i18n::resolve_language("auto", Some("nl")), "nl");
    assert_eq!(i18n::resolve_language("EN-gb", None), "en");
    let detected = i18n::resolve_language("auto", None);
    assert!(detected == "en" || detected == "nl");
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(
        dir.path().join("nl.toml"),
        "[tab]\nprojects = \"Klussen\"\n",
    )
    .expect("write");
    let pack_dir = dir.path().to_string_lossy().to_string();
    let tr = Translator::new_with_pack("nl", Some(&pack_dir));
    assert_eq!(tr.t(keys::TAB_PROJECTS), "Klussen");
    assert_eq!(tr.t(keys::TAB_SETTINGS), "Instellingen");
}

#[test]
fn nested_toml_flattens_to_dotted_keys() {
    let map = parse_toml_to_map("[a.b]\nc = \"d\"\ntop = 1\n").expect("map");
    assert_eq!(map.get("a.b.c").map(String::as_str), Some("d"));
    assert!(parse_toml_to_map("x = 1").is_none());
}

#[test]
fn every_shown_key_is_translated() {
    for lang in ["en", "nl"] {
        let tr = Translator::new(lang);
        for category in ComponentCategory::ALL {
            assert_ne!(tr.t(category.i18n_key()), MISSING, "{lang} {category:?}");
        }
        let sheet = reference::sheet();
        for key in sheet.constants.iter().map(|c| c.key).chain(sheet.tips.iter().copied()) {
            assert_ne!(tr.t(key), MISSING, "{lang} {key}");
        }
        for key in [
            AppearanceMode::Dark.i18n_key(),
            LanguageOption::Dutch.i18n_key(),
            ThemeColor::Indigo.i18n_key(),
        ] {
            assert_ne!(tr.t(key), MISSING, "{lang} {key}");
        }
    }
}

#[test]
fn reference_constants_match_calculators() {
    let copper = reference::find_constant(keys::REFERENCE_COPPER).expect("copper");
    assert!((copper.value - 0.0175).abs() < 1e-12);
    assert_eq!(reference::sheet().tips.len(), 3);
}
