use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use reelmark_testing::TestWorld;

#[test]
fn test_init_stores_the_api_key() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["--api-key", "abc123", "init"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Workspace created"));

    let config = std::fs::read_to_string(world.config_path())?;
    assert!(config.contains("api_key = \"abc123\""));

    let result = world.run(&["init"])?;
    assert!(result.stdout().contains("Workspace already initialized"));

    let result = world.run(&["--api-key", "def456", "init"])?;
    assert!(result.stdout().contains("API key updated"));
    Ok(())
}

#[test]
fn test_init_without_key_suggests_storing_one() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["init"])?;
    assert!(result.success());
    assert!(result.stdout().contains("missing"));
    assert!(result.stdout().contains("reelmark init --api-key <KEY>"));
    Ok(())
}

#[test]
fn test_no_command_off_a_terminal_prints_guidance() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("reelmark");
    world.configure_command(&mut cmd);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Not initialized yet."))
        .stdout(predicate::str::contains("reelmark search <TERM>"));
}

#[test]
fn test_browse_off_a_terminal_fails() {
    let world = TestWorld::new().with_api_key("test-key");

    let mut cmd = cargo_bin_cmd!("reelmark");
    world.configure_command(&mut cmd).arg("browse");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}
