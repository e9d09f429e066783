//! Question nodes and the snapshot they are evaluated against.

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

use super::present::Presenter;
use crate::naming::project_name_of;
use crate::target::TargetProbe;
use crate::templates::{TemplateEntry, TemplateRegistry};
use crate::types::{AnswerSet, ExternalArgs, Update};

/// What to ask the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Free text with an optional pre-filled default
    Text {
        message: String,
        initial: Option<String>,
    },
    /// Pick one entry of `choices`
    Select {
        message: String,
        choices: Vec<Choice>,
        initial: usize,
    },
}

/// One selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// Rendered label
    pub title: String,
    /// Stable value, independent of presentation
    pub value: String,
}

/// A raw answer as returned by a [`Prompter`](super::Prompter)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    /// Index into the question's choices
    Select(usize),
}

impl Question {
    pub fn message(&self) -> &str {
        match self {
            Self::Text { message, .. } | Self::Select { message, .. } => message,
        }
    }

    /// Structural check of an answer against this question
    pub fn check(&self, answer: &Answer) -> Result<(), String> {
        match (self, answer) {
            (Self::Text { .. }, Answer::Text(_)) => Ok(()),
            (Self::Select { choices, .. }, Answer::Select(index)) if *index < choices.len() => {
                Ok(())
            }
            (Self::Select { .. }, Answer::Select(_)) => Err("Invalid selection".to_string()),
            _ => Err("Unexpected answer type".to_string()),
        }
    }
}

/// Why a run stopped before completing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    /// The user chose not to touch a non-empty target directory
    OverwriteDeclined,
    /// The user aborted input at a prompt
    Aborted { question: String },
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OverwriteDeclined | Self::Aborted { .. } => f.write_str("Operation cancelled"),
        }
    }
}

/// Immutable view of a run, handed to every node.
///
/// `answers` only contains what earlier nodes produced.
pub struct ChainContext<'a> {
    pub answers: &'a AnswerSet,
    pub args: &'a ExternalArgs,
    pub registry: &'a TemplateRegistry,
    /// Registry entry the template argument resolved to, if any
    pub template: Option<TemplateEntry<'a>>,
    pub probe: &'a dyn TargetProbe,
    pub presenter: &'a dyn Presenter,
    pub cwd: &'a Utf8Path,
    pub default_project_name: &'a str,
}

impl ChainContext<'_> {
    /// Absolute path of the current target directory
    pub fn target_path(&self) -> Utf8PathBuf {
        self.cwd.join(&self.answers.target_dir)
    }

    /// Name derived from the target directory
    pub fn project_name(&self) -> String {
        project_name_of(&self.answers.target_dir, self.cwd)
            .unwrap_or_else(|| self.default_project_name.to_string())
    }
}

/// One step of the question chain.
///
/// Every method is evaluated lazily, when the engine reaches the node.
pub trait QuestionNode {
    /// AnswerSet field this node fills
    fn name(&self) -> &'static str;

    /// Evaluated before anything else; an error cancels the whole run
    fn guard(&self, _ctx: &ChainContext<'_>) -> Result<(), CancelReason> {
        Ok(())
    }

    /// Whether the user has to be asked
    fn is_applicable(&self, ctx: &ChainContext<'_>) -> bool;

    /// Message, choices and default for the question
    fn render(&self, ctx: &ChainContext<'_>) -> Question;

    /// Semantic check of an answer; `Err` carries the reason shown on re-entry
    fn validate(&self, _ctx: &ChainContext<'_>, _answer: &Answer) -> Result<(), String> {
        Ok(())
    }

    /// Updates for an accepted answer
    fn commit(&self, ctx: &ChainContext<'_>, answer: Answer) -> Vec<Update>;

    /// Updates carried forward when the node is not asked
    fn derive(&self, _ctx: &ChainContext<'_>) -> Vec<Update> {
        Vec::new()
    }
}
