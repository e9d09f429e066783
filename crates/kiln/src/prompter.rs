//! Terminal implementations of the chain's prompting seams

use std::io::{self, IsTerminal};

use console::Style;
use dialoguer::{Input, Select};
use kiln_projects::chain::{Answer, Presenter, Prompter, Question};
use kiln_projects::{Error, Result};

use crate::output;

/// Prompter backed by dialoguer widgets on the controlling terminal
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }

    fn ask_text(message: &str, initial: Option<&str>) -> Result<Option<Answer>> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt_text(message))
            .allow_empty(true);
        if let Some(initial) = initial {
            input = input.with_initial_text(initial);
        }
        map_interaction(input.interact_text()).map(|value| value.map(Answer::Text))
    }

    fn ask_select(message: &str, titles: &[&str], initial: usize) -> Result<Option<Answer>> {
        let selection = Select::new()
            .with_prompt(prompt_text(message))
            .items(titles)
            .default(initial.min(titles.len().saturating_sub(1)))
            .interact_opt();
        // Esc or q inside the list returns None
        map_interaction(selection).map(|choice| choice.flatten().map(Answer::Select))
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, question: &Question, error: Option<&str>) -> Result<Option<Answer>> {
        if !io::stdin().is_terminal() || !console::user_attended_stderr() {
            return Err(Error::NotInteractive);
        }

        if let Some(reason) = error {
            output::error(reason);
        }

        match question {
            Question::Text { message, initial } => Self::ask_text(message, initial.as_deref()),
            Question::Select {
                message,
                choices,
                initial,
            } => {
                let titles: Vec<&str> = choices.iter().map(|c| c.title.as_str()).collect();
                Self::ask_select(message, &titles, *initial)
            }
        }
    }
}

/// dialoguer's theme appends its own colon
fn prompt_text(message: &str) -> &str {
    message.trim_end().trim_end_matches(':')
}

/// Treat an interrupted read as the user aborting the prompt
fn map_interaction<T>(result: dialoguer::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(Error::prompt(err.to_string())),
    }
}

/// Presenter that colors registry labels with `console` styles
#[derive(Debug, Clone, Copy)]
pub struct ConsolePresenter {
    color: bool,
}

impl ConsolePresenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl Presenter for ConsolePresenter {
    fn paint(&self, text: &str, color: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        // unknown tags leave the text unstyled
        Style::from_dotted_str(color)
            .force_styling(true)
            .apply_to(text)
            .to_string()
    }
}
