//! Shared helpers for kiln-projects integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use camino::Utf8PathBuf;
use kiln_projects::chain::{Answer, Prompter, Question};
use kiln_projects::{Error, Result};
use tempfile::TempDir;

/// Prompter double that replays scripted answers and records every question.
///
/// A `None` entry in the script simulates the user aborting the prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Option<Answer>>,
    pub asked: Vec<AskedQuestion>,
}

#[derive(Debug, Clone)]
pub struct AskedQuestion {
    pub question: Question,
    pub error: Option<String>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Option<Answer>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Prompter that must never be asked anything
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.asked.iter().map(|a| a.question.message()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question, error: Option<&str>) -> Result<Option<Answer>> {
        self.asked.push(AskedQuestion {
            question: question.clone(),
            error: error.map(str::to_string),
        });
        self.script
            .pop_front()
            .ok_or_else(|| Error::prompt(format!("unscripted question: {}", question.message())))
    }
}

pub fn text(value: &str) -> Option<Answer> {
    Some(Answer::Text(value.to_string()))
}

pub fn select(index: usize) -> Option<Answer> {
    Some(Answer::Select(index))
}

pub fn abort() -> Option<Answer> {
    None
}

/// Temporary working directory with a UTF-8 path
pub struct Workspace {
    _temp: TempDir,
    pub path: Utf8PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let path =
            Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
        Self { _temp: temp, path }
    }

    /// Create `name` inside the workspace with a single file in it
    pub fn occupy(&self, name: &str) {
        let dir = self.path.join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html></html>").unwrap();
    }

    pub fn dir_name(&self) -> &str {
        self.path.file_name().unwrap_or_default()
    }

    /// Create `name` inside the workspace as an empty directory
    pub fn empty_dir(&self, name: &str) {
        std::fs::create_dir_all(self.path.join(name)).unwrap();
    }
}
