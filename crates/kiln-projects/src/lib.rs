//! # kiln-projects
//!
//! Project scaffolding library for the kiln CLI providing:
//! - The template registry (frameworks, variants, samples)
//! - Template identifier resolution from canonical names or tag lists
//! - The dependent question chain that fills in a project's configuration
//!
//! # Examples
//!
//! ## Resolve a template from tags
//!
//! ```no_run
//! use kiln_projects::templates::TemplateRegistry;
//!
//! let registry = TemplateRegistry::from_embedded().unwrap();
//! let id = registry.resolve(Some("tailwind,devtools,vue"));
//! assert_eq!(id, Some("vue-devtools-tailwind"));
//! ```
//!
//! ## Run the question chain
//!
//! ```no_run
//! use camino::Utf8PathBuf;
//! use kiln_projects::chain::{ChainOutcome, Prompter, QuestionChain};
//! use kiln_projects::templates::TemplateRegistry;
//! use kiln_projects::ExternalArgs;
//!
//! # fn example(prompter: &mut dyn Prompter) -> kiln_projects::Result<()> {
//! let registry = TemplateRegistry::from_embedded()?;
//! let chain = QuestionChain::new(&registry, Utf8PathBuf::from("/tmp"));
//! let args = ExternalArgs {
//!     target_dir: Some("my-app".to_string()),
//!     template: Some("vue-devtools-tailwind".to_string()),
//!     ..Default::default()
//! };
//!
//! match chain.run(&args, prompter)? {
//!     ChainOutcome::Completed(project) => println!("{}", project.template()),
//!     ChainOutcome::Cancelled(reason) => eprintln!("{}", reason),
//! }
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod error;
pub mod naming;
pub mod target;
pub mod templates;
pub mod types;

pub use error::{Error, Result};

pub use chain::{ChainOutcome, QuestionChain};
pub use templates::TemplateRegistry;
pub use types::{
    AnswerSet, ExternalArgs, Framework, OverwriteChoice, ResolvedProject, Sample, Variant,
};
