use super::helpers::{stderr, stdout, TestProject, TEST_USER};
use std::fs;

#[test]
fn test_list_templates() {
    let test_env = TestProject::new();

    let output = test_env.run(&["list"]);
    assert!(output.status.success());

    let stdout = stdout(&output);
    assert!(stdout.contains("11 available"));
    assert!(stdout.contains("GNU AGPLv3"));
    assert!(stdout.contains("SIL Open Font License"));
}

#[test]
fn test_list_json() {
    let test_env = TestProject::new();

    let output = test_env.run(&["list", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let keys: Vec<_> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys.len(), 11);
    assert_eq!(keys.first().map(String::as_str), Some("agpl-3.0"));
    assert_eq!(keys.last().map(String::as_str), Some("ofl-1.1"));
}

#[test]
fn test_generate_into_directory() {
    let test_env = TestProject::new();
    let project = test_env.create_project("proj", &[]).unwrap();

    let output = test_env.run(&["generate", "mit", "proj", "--year", "2024"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let content = fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(content.contains(&format!("Copyright (c) 2024 {}", TEST_USER)));
    assert!(!content.contains("{$"));
    assert!(stdout(&output).contains("MIT License"));
}

#[test]
fn test_generate_next_to_file() {
    let test_env = TestProject::new();
    let project = test_env
        .create_project("proj", &[("README.md", "# proj\n")])
        .unwrap();

    let output = test_env.run(&["generate", "apache-2.0", "proj/README.md", "--name", "Alice"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let content = fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(content.contains("Apache License"));
    assert!(content.contains("Alice"));
    assert_eq!(fs::read_to_string(project.join("README.md")).unwrap(), "# proj\n");
}

#[test]
fn test_generate_refuses_existing_license() {
    let test_env = TestProject::new();
    let project = test_env
        .create_project("proj", &[("License.txt", "existing")])
        .unwrap();

    let output = test_env.run(&["generate", "mit", "proj"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--force"));
    assert!(!project.join("LICENSE").exists());

    let forced = test_env.run(&["generate", "mit", "proj", "--force"]);
    assert!(forced.status.success(), "{}", stderr(&forced));
    assert!(project.join("LICENSE").exists());
    assert_eq!(fs::read_to_string(project.join("License.txt")).unwrap(), "existing");
}

#[test]
fn test_generate_twice_overwrites_with_force() {
    let test_env = TestProject::new();
    let project = test_env.create_project("proj", &[]).unwrap();

    assert!(test_env.run(&["generate", "gpl-3.0", "proj"]).status.success());
    assert!(test_env
        .run(&["generate", "unlicense", "proj", "--force"])
        .status
        .success());

    let content = fs::read_to_string(project.join("LICENSE")).unwrap();
    assert!(content.starts_with("This is free and unencumbered software"));
    assert!(!content.contains("GNU GENERAL PUBLIC LICENSE"));
}

#[test]
fn test_generate_stdout_writes_nothing() {
    let test_env = TestProject::new();

    let output = test_env.run(&["generate", "MIT License", "--stdout", "--year", "1999"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains(&format!("Copyright (c) 1999 {}", TEST_USER)));
    assert!(!test_env.path().join("LICENSE").exists());
}

#[test]
fn test_generate_unknown_template() {
    let test_env = TestProject::new();

    let output = test_env.run(&["generate", "wtfpl"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown template 'wtfpl'"));
}

#[test]
fn test_generate_missing_parent() {
    let test_env = TestProject::new();

    let output = test_env.run(&["generate", "mit", "missing/README.md"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid target"));
}

#[test]
fn test_check_exit_code() {
    let test_env = TestProject::new();
    test_env.create_project("empty", &[]).unwrap();
    test_env
        .create_project("licensed", &[("LICENSE", "text")])
        .unwrap();

    let output = test_env.run(&["check", "empty"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No license file"));

    let output = test_env.run(&["check", "licensed"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("License file found"));
}

#[test]
fn test_init_and_default_template() {
    let test_env = TestProject::new();

    let init = test_env.run(&["init", "--template", "mpl-2.0", "--name", "Config Owner"]);
    assert!(init.status.success(), "{}", stderr(&init));
    assert!(test_env.path().join("license-template.toml").exists());

    let validate = test_env.run(&["config", "--validate"]);
    assert!(validate.status.success());

    let generate = test_env.run(&["generate"]);
    assert!(generate.status.success(), "{}", stderr(&generate));
    let content = fs::read_to_string(test_env.path().join("LICENSE")).unwrap();
    assert!(content.contains("Mozilla Public License Version 2.0"));

    let again = test_env.run(&["init"]);
    assert!(!again.status.success());
}

#[test]
fn test_config_name_overrides_user() {
    let test_env = TestProject::new();
    fs::write(
        test_env.path().join("license-template.toml"),
        "name = \"Config Owner\"\n",
    )
    .unwrap();

    let output = test_env.run(&["generate", "mit", "--stdout", "--year", "2024"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Copyright (c) 2024 Config Owner"));

    let output = test_env.run(&["generate", "mit", "--stdout", "--year", "2024", "--name", "Flag Owner"]);
    assert!(stdout(&output).contains("Copyright (c) 2024 Flag Owner"));
}

#[test]
fn test_template_dir_override() {
    let test_env = TestProject::new();
    test_env
        .create_project("custom", &[("mit.txt", "Custom MIT {$YEAR} {$NAME}\n")])
        .unwrap();
    fs::write(
        test_env.path().join("license-template.toml"),
        "template_dir = \"custom\"\n",
    )
    .unwrap();

    let output = test_env.run(&["generate", "mit", "--stdout", "--year", "2030"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), format!("Custom MIT 2030 {}\n", TEST_USER));

    // Templates missing from the directory fail instead of producing an empty file
    let output = test_env.run(&["generate", "gpl-3.0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to load license template"));
    assert!(!test_env.path().join("LICENSE").exists());
}

#[test]
fn test_config_validate_rejects_unknown_default() {
    let test_env = TestProject::new();
    fs::write(
        test_env.path().join("license-template.toml"),
        "default_template = \"wtfpl\"\n",
    )
    .unwrap();

    let output = test_env.run(&["config", "--validate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("wtfpl"));
}
