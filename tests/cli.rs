use std::process::Command;

use power_plan_toolbox::i18n::{keys, Translator};

fn cli(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_power_plan_cli"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run power_plan_cli")
}

#[test]
fn one_shot_ohms_prints_solution() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = cli(dir.path(), &["--lang", "en", "ohms", "--voltage", "230", "--current", "10"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("23.0 Ω"), "{stdout}");
}

#[test]
fn one_shot_ohms_reports_missing_inputs_in_selected_language() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = cli(dir.path(), &["--lang", "nl", "ohms", "--voltage", "230"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    let expected = Translator::new("nl").t(keys::OHMS_VALIDATION).to_string();
    assert!(stderr.contains(&expected), "{stderr}");
    assert!(!stderr.contains("calculation error"), "{stderr}");
}
