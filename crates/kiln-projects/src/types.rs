//! Core types for project scaffolding

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::naming::format_target_dir;

/// A top-level framework choice, e.g. `vue`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    pub name: String,
    #[serde(default)]
    pub display: Option<String>,
    /// Color tag used when rendering the choice
    pub color: String,
    /// An empty list makes the framework itself a terminal template
    #[serde(default)]
    pub variants: Vec<Variant>,
}

/// A template variant of a framework; `name` is its canonical identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    #[serde(default)]
    pub display: Option<String>,
    pub color: String,
    #[serde(default)]
    pub samples: Vec<Sample>,
}

/// An example application shipped with a variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub name: String,
    #[serde(default)]
    pub display: Option<String>,
    pub color: String,
}

impl Framework {
    /// Human-readable label
    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }

    /// Whether this framework needs no further drill-down
    pub fn is_terminal(&self) -> bool {
        self.variants.is_empty()
    }
}

impl Variant {
    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }

    /// Find a sample by exact (case-sensitive) name
    pub fn find_sample(&self, name: &str) -> Option<&Sample> {
        self.samples.iter().find(|s| s.name == name)
    }
}

impl Sample {
    pub fn label(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }
}

/// How to treat an existing, non-empty target directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteChoice {
    /// Remove existing files and continue
    Yes,
    /// Cancel the operation
    No,
    /// Keep existing files and continue
    Ignore,
}

impl OverwriteChoice {
    pub fn all() -> [Self; 3] {
        [Self::Yes, Self::No, Self::Ignore]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Ignore => "ignore",
        }
    }

    /// Prompt label for the choice
    pub fn title(&self) -> &'static str {
        match self {
            Self::Yes => "Remove existing files and continue",
            Self::No => "Cancel operation",
            Self::Ignore => "Ignore files and continue",
        }
    }
}

impl fmt::Display for OverwriteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs supplied on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalArgs {
    /// Skips the project-name question and fixes the target directory
    pub target_dir: Option<String>,
    /// Raw template text, fed to the resolver
    pub template: Option<String>,
    /// Compared case-sensitively against the selected variant's samples
    pub sample: Option<String>,
    /// Pre-seeds the overwrite choice, bypassing that question entirely
    pub overwrite: bool,
}

impl ExternalArgs {
    /// Target directory argument after formatting. Blank or separator-only
    /// values count as not supplied.
    pub fn formatted_target_dir(&self) -> Option<String> {
        self.target_dir
            .as_deref()
            .map(format_target_dir)
            .filter(|dir| !dir.is_empty())
    }
}

/// A single change the chain engine applies to the [`AnswerSet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    ProjectName(String),
    TargetDir(String),
    Overwrite(OverwriteChoice),
    PackageName(String),
    Framework(Framework),
    Variant(Variant),
    Sample(Sample),
}

impl Update {
    /// AnswerSet field touched by this update
    pub fn field(&self) -> &'static str {
        match self {
            Self::ProjectName(_) => "projectName",
            Self::TargetDir(_) => "targetDir",
            Self::Overwrite(_) => "overwrite",
            Self::PackageName(_) => "packageName",
            Self::Framework(_) => "framework",
            Self::Variant(_) => "variant",
            Self::Sample(_) => "sample",
        }
    }
}

/// Answers accumulated while the chain runs.
///
/// Every field is set at most once; only `target_dir` may be replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    pub project_name: Option<String>,
    pub target_dir: String,
    pub overwrite: Option<OverwriteChoice>,
    pub package_name: Option<String>,
    pub framework: Option<Framework>,
    pub variant: Option<Variant>,
    pub sample: Option<Sample>,
}

impl AnswerSet {
    /// Start a run, pre-seeding whatever the arguments fix up front
    pub fn seeded(args: &ExternalArgs) -> Self {
        Self {
            overwrite: args.overwrite.then_some(OverwriteChoice::Yes),
            ..Default::default()
        }
    }

    /// Apply an update. Returns `false` when a set-once field was already set
    /// and the update was dropped.
    pub fn apply(&mut self, update: Update) -> bool {
        fn set_once<T>(slot: &mut Option<T>, value: T) -> bool {
            if slot.is_some() {
                return false;
            }
            *slot = Some(value);
            true
        }

        let field = update.field();
        let applied = match update {
            Update::TargetDir(dir) => {
                self.target_dir = dir;
                true
            }
            Update::ProjectName(name) => set_once(&mut self.project_name, name),
            Update::Overwrite(choice) => set_once(&mut self.overwrite, choice),
            Update::PackageName(name) => set_once(&mut self.package_name, name),
            Update::Framework(framework) => set_once(&mut self.framework, framework),
            Update::Variant(variant) => set_once(&mut self.variant, variant),
            Update::Sample(sample) => set_once(&mut self.sample, sample),
        };

        if !applied {
            tracing::warn!(field, "Ignoring update to an answer that is already set");
        }
        applied
    }

    /// Convert into a [`ResolvedProject`], checking the completion invariants
    pub fn finish(self) -> Result<ResolvedProject> {
        if self.target_dir.is_empty() {
            return Err(Error::incomplete_answers("targetDir"));
        }
        let package_name = self
            .package_name
            .ok_or_else(|| Error::incomplete_answers("packageName"))?;
        let framework = self
            .framework
            .ok_or_else(|| Error::incomplete_answers("framework"))?;
        if !framework.is_terminal() && self.variant.is_none() {
            return Err(Error::incomplete_answers("variant"));
        }
        if let Some(variant) = &self.variant {
            if !variant.samples.is_empty() && self.sample.is_none() {
                return Err(Error::incomplete_answers("sample"));
            }
        }

        Ok(ResolvedProject {
            project_name: self.project_name,
            target_dir: self.target_dir,
            overwrite: self.overwrite,
            package_name,
            framework,
            variant: self.variant,
            sample: self.sample,
        })
    }
}

/// Fully resolved project configuration, ready for the file-writing step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    pub project_name: Option<String>,
    pub target_dir: String,
    pub overwrite: Option<OverwriteChoice>,
    pub package_name: String,
    pub framework: Framework,
    pub variant: Option<Variant>,
    pub sample: Option<Sample>,
}

impl ResolvedProject {
    /// Canonical template identifier of the selected path
    pub fn template(&self) -> &str {
        self.variant
            .as_ref()
            .map(|v| v.name.as_str())
            .unwrap_or(&self.framework.name)
    }
}
