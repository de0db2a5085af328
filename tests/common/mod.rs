use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

pub fn trainplan_cmd() -> Command {
    let mut cmd = Command::cargo_bin("trainplan").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a plan document into the temp directory
pub fn write_plan(temp: &TempDir, filename: &str, content: &str) {
    fs::write(temp.path().join(filename), content).unwrap();
}

/// One week, one completed session
pub const EASY_RUN_PLAN: &str = r#"<?xml version="1.0"?>
<data>
  <name>Base building</name>
  <weeks>
    <week>
      <wload>Low</wload>
      <records>
        <record>
          <date>01-January-2024</date>
          <title>Easy run</title>
          <load>Low</load>
          <done>yes</done>
          <distance>6.0</distance>
        </record>
      </records>
    </week>
  </weeks>
</data>
"#;
