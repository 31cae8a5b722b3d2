use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn cmd() -> Command {
    Command::cargo_bin("vcfilters").unwrap()
}

const PROJECT_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project DefaultTargets="Build" ToolsVersion="4.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <ItemGroup Label="ProjectConfigurations">
    <ProjectConfiguration Include="Debug|Win32" />
  </ItemGroup>
  <ItemGroup>
    <ClCompile Include="src\foo\bar.cpp" />
    <ClCompile Include="main.cpp" />
  </ItemGroup>
  <ItemGroup>
    <ClInclude Include="src\foo\bar.h" />
  </ItemGroup>
</Project>
"#;

#[test]
fn no_arguments_prints_usage() {
    cmd().assert().failure().code(1).stderr(contains("Usage"));
}

#[test]
fn extra_arguments_print_usage() {
    cmd()
        .args(["a.vcxproj", "b.vcxproj"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Usage"));
}

#[test]
fn missing_project_file_names_the_path() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.vcxproj");

    cmd()
        .arg(&missing)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("missing.vcxproj"));

    // No output file may be produced on failure
    assert!(!dir.path().join("missing.vcxproj.filters").exists());
}

#[test]
fn converts_project_next_to_input() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("demo.vcxproj");
    fs::write(&project, PROJECT_XML).unwrap();

    cmd()
        .arg(&project)
        .assert()
        .success()
        .stdout(contains("CONVERSION COMPLETE"));

    let output = dir.path().join("demo.vcxproj.filters");
    assert!(output.exists());

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains(r#"<Filter Include="src\foo"/>"#));
    assert!(content.contains(r#"<ClCompile Include="src\foo\bar.cpp">"#));
    assert!(content.contains(r"<Filter>src\foo</Filter>"));
    assert!(content.contains(r#"<ClCompile Include="main.cpp"/>"#));
    // The labeled configuration group contributes nothing
    assert!(!content.contains("ProjectConfiguration"));
}

#[test]
fn output_flag_overrides_destination() {
    let dir = tempdir().unwrap();
    let project = dir.path().join("demo.vcxproj");
    let output = dir.path().join("elsewhere.filters");
    fs::write(&project, PROJECT_XML).unwrap();

    cmd()
        .arg(&project)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    assert!(output.exists());
    assert!(!dir.path().join("demo.vcxproj.filters").exists());
}

#[test]
fn generates_shell_completions() {
    cmd()
        .args(["--generate", "bash"])
        .assert()
        .success()
        .stdout(contains("vcfilters"));
}
