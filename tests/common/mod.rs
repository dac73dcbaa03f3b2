use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;

pub fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("vi-meta");
    cmd.env_remove("VI_META_LOG").env_remove("RUST_LOG");
    cmd
}

#[allow(dead_code)]
pub fn run_json(args: &[&str]) -> Value {
    let out = cmd()
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}
