//! Seams between the chain and the terminal.

use super::question::{Answer, Question};
use crate::error::Result;

/// Decorates choice labels. Never makes decisions.
pub trait Presenter {
    /// Text colored with a registry color tag (`green`, `cyan`, ...)
    fn paint(&self, text: &str, color: &str) -> String;
}

/// Presenter that leaves text untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPresenter;

impl Presenter for PlainPresenter {
    fn paint(&self, text: &str, _color: &str) -> String {
        text.to_string()
    }
}

/// Collects one answer per displayed question.
pub trait Prompter {
    /// Ask `question` and block until answered.
    ///
    /// `error` is the reason the previous answer to the same question was
    /// rejected. Returns `Ok(None)` when the user aborts input.
    fn ask(&mut self, question: &Question, error: Option<&str>) -> Result<Option<Answer>>;
}
