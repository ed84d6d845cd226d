#![allow(dead_code)]

use assert_cmd::Command;
use serde::Deserialize;
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(Debug, Deserialize)]
pub struct Record {
    pub name: String,
    pub phone: String,
}

/// A phone book table living in its own temporary directory.
pub struct Book {
    pub dir: TempDir,
}

impl Book {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self { dir: TempDir::new()? })
    }

    /// Loads the fixture contacts to simulate a non-empty phone book.
    pub fn seeded() -> Result<Self, Box<dyn std::error::Error>> {
        let book = Self::new()?;
        for record in fixture_contacts()? {
            book.cmd()?
                .args(["--add-entry", "--name", &record.name, "--phone", &record.phone])
                .assert()
                .success();
        }
        Ok(book)
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("phonebook.json")
    }

    pub fn cmd(&self) -> Result<Command, Box<dyn std::error::Error>> {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
        cmd.current_dir(self.dir.path())
            .env("PHONEBOOK_PATH", self.db_path())
            .env_remove("RUST_LOG");
        Ok(cmd)
    }

    pub fn add(&self, name: &str, phone: &str) -> Result<String, Box<dyn std::error::Error>> {
        self.run(&["--add-entry", "--name", name, "--phone", phone])
    }

    pub fn remove(&self, phone: &str) -> Result<String, Box<dyn std::error::Error>> {
        self.run(&["--remove-entry", "--phone", phone])
    }

    pub fn list_all(&self) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let stdout = self.run(&["--list-all"])?;
        Ok(stdout.lines().map(str::to_string).collect())
    }

    pub fn run(&self, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
        let output = self.cmd()?.args(args).output()?;
        assert!(output.status.success(), "{:?} failed: {:?}", args, output);
        Ok(String::from_utf8(output.stdout)?)
    }
}

pub fn fixture_contacts() -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/contacts.csv");
    let mut reader = csv::Reader::from_path(path)?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}
