//! Error paths and unusual inputs

use crate::common::IconProject;
use crate::pf;
use anyhow::Result;

#[test]
fn test_missing_source_dir_is_fatal() -> Result<()> {
    let project = IconProject::with_icons(&[])?;
    std::fs::remove_dir(project.source_dir())?;

    let result = pf!(project.root(), "sync").assert_failure()?;

    assert!(result.contains_stderr("icon source directory not found"));
    assert!(!project.map_path().exists());
    Ok(())
}

#[test]
fn test_corrupt_map_is_replaced_and_backed_up() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg"])?;
    project.write_map("{ \"home\": ")?;

    let result = pf!(project.root(), "sync").assert_success()?;

    assert!(result.contains_stdout("unreadable"));
    assert!(result.contains_stdout("Previous codepoint map saved to"));
    assert_eq!(project.read_map()?, "{\n  \"home\": \"ea01\"\n}\n");

    let backup = project.root().join("build/unicode-map.json.corrupt");
    assert_eq!(std::fs::read_to_string(backup)?, "{ \"home\": ");
    Ok(())
}

#[test]
fn test_duplicate_basenames_share_one_codepoint() -> Result<()> {
    let project = IconProject::with_icons(&["solid/star.svg", "outline/star.svg", "home.svg"])?;

    let result = pf!(project.root(), "sync").assert_success()?;

    assert!(result.contains_stdout("Scanned 3 icon files (2 icons)"));
    assert!(result.contains_stdout("more than one directory"));
    assert_eq!(
        project.read_map()?,
        "{\n  \"home\": \"ea01\",\n  \"star\": \"ea02\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_custom_base_and_paths() -> Result<()> {
    let project = IconProject::with_icons(&[])?;
    project.write_config(
        "source_dir = \"icons\"\nmap_path = \"codepoints.json\"\nbase_codepoint = \"f000\"\n",
    )?;
    std::fs::create_dir_all(project.root().join("icons"))?;
    std::fs::write(project.root().join("icons/bell.svg"), "<svg/>")?;

    pf!(project.root(), "sync").assert_success()?;

    let map = std::fs::read_to_string(project.root().join("codepoints.json"))?;
    assert_eq!(map, "{\n  \"bell\": \"f000\"\n}\n");
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg"])?;
    project.write_config("base_codepoint = \"41\"\n")?;

    let result = pf!(project.root(), "sync").assert_failure()?;

    assert!(result.contains_stderr("private-use area"));
    Ok(())
}

#[test]
fn test_explicit_root_flag() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg"])?;
    let elsewhere = tempfile::TempDir::new()?;
    let root = project.root().to_string_lossy().to_string();

    pf!(elsewhere.path(), "--root", &root, "sync").assert_success()?;

    assert!(project.map_path().exists());
    Ok(())
}

#[test]
fn test_config_example_prints_template() -> Result<()> {
    let project = IconProject::with_icons(&[])?;

    let result = pf!(project.root(), "config", "--example").assert_success()?;

    assert!(result.contains_stdout("base_codepoint = \"ea01\""));
    assert!(result.contains_stdout("[generator]"));
    Ok(())
}
