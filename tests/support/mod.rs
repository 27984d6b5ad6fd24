#![allow(dead_code)]

use anyhow::{Context, Result};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const AD_INSTANCE_ID: &str = "aaaaaaaa-aaaa-aaaa-aaaa-aaaaaaaaaaaa";

pub fn lookup_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_toolchain-lookup"))
}

// Builds a lookup command with a clean TC_API_RES/TC_LOG environment.
pub fn lookup_command(api_res: Option<&str>) -> Command {
    let mut cmd = Command::new(lookup_binary());
    cmd.env_remove("TC_API_RES").env_remove("TC_LOG");
    if let Some(value) = api_res {
        cmd.env("TC_API_RES", value);
    }
    cmd
}

pub fn run_lookup(api_res: Option<&str>, args: &[&str]) -> Result<Output> {
    lookup_command(api_res)
        .args(args)
        .output()
        .context("failed to execute toolchain-lookup")
}

pub fn run_lookup_with_catalog(path: &Path, args: &[&str]) -> Result<Output> {
    lookup_command(None)
        .arg("--catalog")
        .arg(path)
        .args(args)
        .output()
        .context("failed to execute toolchain-lookup with --catalog")
}

pub fn stdout_lines(output: &Output) -> Result<Vec<String>> {
    let stdout = String::from_utf8(output.stdout.clone()).context("stdout utf-8")?;
    Ok(stdout.lines().map(str::to_string).collect())
}

pub fn service(service_id: &str, instance_id: &str, url: &str, name: &str) -> Value {
    json!({
        "service_id": service_id,
        "instance_id": instance_id,
        "url": url,
        "parameters": {"name": name}
    })
}

pub fn api_response(services: Vec<Value>) -> String {
    json!({"items": [{"services": services}]}).to_string()
}

pub fn example_response() -> String {
    api_response(vec![service(
        "activedeploy-broker",
        AD_INSTANCE_ID,
        "https://ad.example",
        "ad-svc",
    )])
}
