//! Dependent question chain.
//!
//! Walks an ordered list of [`QuestionNode`]s. For each node the engine
//! builds a fresh [`ChainContext`] over the answers collected so far, then:
//!
//! 1. runs the node's guard (which may cancel the run),
//! 2. asks the node whether it applies,
//! 3. if so renders the question, prompts until an answer validates and
//!    applies the committed updates,
//! 4. otherwise applies whatever the node derives silently.
//!
//! Cancellation is returned as [`ChainOutcome::Cancelled`]; the error channel
//! only carries prompter failures.

pub mod nodes;
pub mod present;
pub mod question;

pub use nodes::standard_nodes;
pub use present::{PlainPresenter, Presenter, Prompter};
pub use question::{Answer, CancelReason, ChainContext, Choice, Question, QuestionNode};

use camino::Utf8PathBuf;
use kiln_core::config::DEFAULT_PROJECT_NAME;

use crate::error::Result;
use crate::target::{FsProbe, TargetProbe};
use crate::templates::TemplateRegistry;
use crate::types::{AnswerSet, ExternalArgs, ResolvedProject};

/// Result of a chain run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainOutcome {
    Completed(ResolvedProject),
    Cancelled(CancelReason),
}

/// The question chain engine
pub struct QuestionChain<'r> {
    registry: &'r TemplateRegistry,
    nodes: Vec<Box<dyn QuestionNode>>,
    probe: Box<dyn TargetProbe>,
    presenter: Box<dyn Presenter>,
    cwd: Utf8PathBuf,
    default_project_name: String,
}

impl<'r> QuestionChain<'r> {
    /// Standard chain over `registry`, resolving relative target dirs against `cwd`
    pub fn new(registry: &'r TemplateRegistry, cwd: Utf8PathBuf) -> Self {
        Self {
            registry,
            nodes: standard_nodes(),
            probe: Box::new(FsProbe),
            presenter: Box::new(PlainPresenter),
            cwd,
            default_project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }

    pub fn with_probe(mut self, probe: impl TargetProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    pub fn with_default_project_name(mut self, name: impl Into<String>) -> Self {
        self.default_project_name = name.into();
        self
    }

    /// Run the chain to completion or cancellation
    pub fn run(&self, args: &ExternalArgs, prompter: &mut dyn Prompter) -> Result<ChainOutcome> {
        let template = self.registry.resolve_entry(args.template.as_deref());
        if let Some(raw) = args.template.as_deref() {
            if template.is_none() {
                tracing::debug!(template = raw, "Template argument did not resolve");
            }
        }

        let mut answers = AnswerSet::seeded(args);

        for node in &self.nodes {
            let updates = {
                let ctx = ChainContext {
                    answers: &answers,
                    args,
                    registry: self.registry,
                    template,
                    probe: self.probe.as_ref(),
                    presenter: self.presenter.as_ref(),
                    cwd: &self.cwd,
                    default_project_name: &self.default_project_name,
                };

                if let Err(reason) = node.guard(&ctx) {
                    tracing::debug!(node = node.name(), %reason, "Question chain cancelled");
                    return Ok(ChainOutcome::Cancelled(reason));
                }

                if node.is_applicable(&ctx) {
                    let question = node.render(&ctx);
                    match ask_until_valid(node.as_ref(), &ctx, &question, prompter)? {
                        Some(answer) => node.commit(&ctx, answer),
                        None => {
                            tracing::debug!(node = node.name(), "Prompt aborted by user");
                            return Ok(ChainOutcome::Cancelled(CancelReason::Aborted {
                                question: node.name().to_string(),
                            }));
                        }
                    }
                } else {
                    tracing::trace!(node = node.name(), "Question skipped");
                    node.derive(&ctx)
                }
            };

            for update in updates {
                tracing::trace!(field = update.field(), "Applying answer");
                answers.apply(update);
            }
        }

        let resolved = answers.finish()?;
        tracing::debug!(
            target_dir = %resolved.target_dir,
            template = resolved.template(),
            "Question chain completed"
        );
        Ok(ChainOutcome::Completed(resolved))
    }
}

/// Prompt until the answer passes both the structural and the node's check.
/// `None` means the user aborted.
fn ask_until_valid(
    node: &dyn QuestionNode,
    ctx: &ChainContext<'_>,
    question: &Question,
    prompter: &mut dyn Prompter,
) -> Result<Option<Answer>> {
    let mut error: Option<String> = None;
    loop {
        let Some(answer) = prompter.ask(question, error.as_deref())? else {
            return Ok(None);
        };
        match question.check(&answer).and_then(|()| node.validate(ctx, &answer)) {
            Ok(()) => return Ok(Some(answer)),
            Err(reason) => {
                tracing::debug!(node = node.name(), %reason, "Answer rejected");
                error = Some(reason);
            }
        }
    }
}
