//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Kiln - Scaffold frontend projects from framework templates
#[derive(Parser, Debug)]
#[command(name = "kiln")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a kiln config file (default: ~/.kiln/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Template registry file replacing the built-in registry
    #[arg(long, global = true)]
    pub registry: Option<Utf8PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub config: Option<Utf8PathBuf>,
    pub registry: Option<Utf8PathBuf>,
    pub no_color: bool,
}

impl Cli {
    pub fn globals(&self) -> GlobalArgs {
        GlobalArgs {
            config: self.config.clone(),
            registry: self.registry.clone(),
            no_color: self.no_color,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project
    Create(CreateArgs),

    /// Inspect the template registry
    #[command(subcommand)]
    Templates(TemplatesCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// Create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Directory to create the project in
    pub target_dir: Option<String>,

    /// Template name or comma-separated tags (e.g. vue-tailwind, tailwind,vue)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Sample to start from
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Remove existing files in the target directory without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Output the resolved answers as JSON
    #[arg(long)]
    pub json: bool,
}

// Templates commands
#[derive(Subcommand, Debug)]
pub enum TemplatesCommands {
    /// List all registered templates
    List(TemplatesListArgs),

    /// Resolve a template name or tag list to its canonical identifier
    Resolve(TemplatesResolveArgs),
}

#[derive(Args, Debug)]
pub struct TemplatesListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TemplatesResolveArgs {
    /// Template name or comma-separated tags
    pub input: String,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
