//! Full builds through an external generator command

use crate::common::IconProject;
use crate::pf;
use anyhow::Result;

#[cfg(unix)]
#[test]
fn test_build_runs_generator_with_manifest() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg", "nested/user.svg"])?;
    project.write_config(
        r#"
[font]
name = "kratos-icons"
class_prefix = "ks"

[generator]
command = "sh"
args = ["-c", "cp \"$PINFONT_MANIFEST\" manifest-copy.json && ls \"$PINFONT_STAGING_DIR\" > staged.txt"]
"#,
    )?;

    let result = pf!(project.root(), "build").assert_success()?;
    assert!(result.contains_stdout("Generating font files"));
    assert!(result.contains_stdout("Icon font built"));

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(project.root().join("manifest-copy.json"))?)?;
    assert_eq!(manifest["font_name"], "kratos-icons");
    assert_eq!(manifest["class_prefix"], "ks");
    assert_eq!(manifest["glyphs"][0]["name"], "home");
    assert_eq!(manifest["glyphs"][0]["codepoint"], "ea01");
    assert_eq!(manifest["glyphs"][1]["name"], "user");
    assert_eq!(manifest["glyphs"][1]["file"], "user.svg");

    let staged = std::fs::read_to_string(project.root().join("staged.txt"))?;
    assert!(staged.contains("home.svg"));
    assert!(staged.contains("user.svg"));

    assert!(project.staging_dirs()?.is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_failed_generator_exits_nonzero_after_cleanup() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg"])?;
    project.write_config("[generator]\ncommand = \"sh\"\nargs = [\"-c\", \"exit 7\"]\n")?;

    let result = pf!(project.root(), "build").assert_failure()?;

    assert_eq!(result.exit_code, 1);
    assert!(result.contains_stderr("Font generation failed"));
    assert!(result.contains_stderr("exited with status 7"));
    assert!(project.staging_dirs()?.is_empty());
    // The map is committed before generation runs
    assert!(project.read_map()?.contains("\"home\": \"ea01\""));
    Ok(())
}

#[test]
fn test_build_without_generator_fails() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg"])?;

    let result = pf!(project.root(), "build").assert_failure()?;

    assert!(result.contains_stderr("no font generator configured"));
    assert!(project.staging_dirs()?.is_empty());
    Ok(())
}
