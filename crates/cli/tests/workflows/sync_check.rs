//! sync / check / show across successive icon set changes

use crate::common::IconProject;
use crate::pf;
use anyhow::Result;

#[test]
fn test_sync_assigns_then_stays_stable() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg", "people/user.svg"])?;

    let result = pf!(project.root(), "sync").assert_success()?;
    assert!(result.contains_stdout("Scanned 2 icon files"));
    assert!(result.contains_stdout("No codepoint map yet"));
    assert_eq!(
        project.read_map()?,
        "{\n  \"home\": \"ea01\",\n  \"user\": \"ea02\"\n}\n"
    );

    // Unchanged icon set: map untouched
    let result = pf!(project.root(), "sync").assert_success()?;
    assert!(result.contains_stdout("Codepoint map is up to date"));
    assert_eq!(
        project.read_map()?,
        "{\n  \"home\": \"ea01\",\n  \"user\": \"ea02\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_removed_icon_frees_codepoint() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg", "user.svg"])?;
    pf!(project.root(), "sync").assert_success()?;

    project.remove_icon("home.svg")?;
    project.add_icon("settings.svg")?;

    let result = pf!(project.root(), "sync").assert_success()?;
    assert!(result.contains_stdout("1 added, 1 removed, 0 reassigned"));
    assert_eq!(
        project.read_map()?,
        "{\n  \"settings\": \"ea01\",\n  \"user\": \"ea02\"\n}\n"
    );

    Ok(())
}

#[test]
fn test_gap_is_filled_before_extending() -> Result<()> {
    let project = IconProject::with_icons(&["a.svg", "b.svg"])?;
    project.write_map("{\"a\": \"ea05\"}")?;

    pf!(project.root(), "sync").assert_success()?;

    assert_eq!(
        project.read_map()?,
        "{\n  \"a\": \"ea05\",\n  \"b\": \"ea01\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_check_reports_pending_changes() -> Result<()> {
    let project = IconProject::with_icons(&["home.svg"])?;

    let result = pf!(project.root(), "check").assert_failure()?;
    assert_eq!(result.exit_code, 1);
    assert!(result.contains_stdout("out of date"));
    assert!(!project.map_path().exists(), "check must not write");

    pf!(project.root(), "sync").assert_success()?;
    let result = pf!(project.root(), "check").assert_success()?;
    assert!(result.contains_stdout("up to date"));

    Ok(())
}

#[test]
fn test_show_lists_sorted_map() -> Result<()> {
    let project = IconProject::with_icons(&["zoom.svg", "alarm.svg"])?;
    pf!(project.root(), "sync").assert_success()?;

    let result = pf!(project.root(), "show").assert_success()?;
    let alarm = result.stdout.find("alarm").expect("alarm listed");
    let zoom = result.stdout.find("zoom").expect("zoom listed");
    assert!(alarm < zoom);
    assert!(result.contains_stdout("U+EA01"));
    assert!(result.contains_stdout("2 icons"));

    Ok(())
}

#[test]
fn test_root_found_from_subdirectory() -> Result<()> {
    let project = IconProject::with_icons(&["arrows/left.svg"])?;
    project.write_config("source_dir = \"svgs\"\n")?;

    pf!(project.source_dir().join("arrows"), "sync").assert_success()?;

    assert!(project.map_path().exists());
    Ok(())
}
