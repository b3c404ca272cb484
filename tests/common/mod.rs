#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let home = root.join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self {
            _tmp: tmp,
            root,
            home,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("asdf");
        cmd.env("HOME", &self.home)
            .env_remove("ASDF_STORE")
            .env_remove("ASDF_TERMINAL")
            .env_remove("EDITOR")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn store_path(&self) -> PathBuf {
        self.home.join(".asdf").join("shortcuts.csv")
    }

    pub fn make_dir(&self, rel: &str) -> String {
        let p = self.root.join("dirs").join(rel);
        fs::create_dir_all(&p).expect("create target dir");
        p.to_str().expect("target path utf8").to_string()
    }

    pub fn run(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf8 stdout")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
