//! Project creation: resolve the template argument and run the question chain

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use kiln_projects::{ChainOutcome, ExternalArgs, QuestionChain, ResolvedProject};
use serde::Serialize;

use super::{load_config, load_registry};
use crate::cli::{CreateArgs, GlobalArgs};
use crate::output;
use crate::prompter::{ConsolePresenter, DialoguerPrompter};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateJson<'a> {
    project_name: Option<&'a str>,
    target_dir: &'a str,
    overwrite: Option<&'static str>,
    package_name: &'a str,
    framework: &'a str,
    variant: Option<&'a str>,
    sample: Option<&'a str>,
    template: &'a str,
}

impl<'a> From<&'a ResolvedProject> for CreateJson<'a> {
    fn from(project: &'a ResolvedProject) -> Self {
        Self {
            project_name: project.project_name.as_deref(),
            target_dir: &project.target_dir,
            overwrite: project.overwrite.map(|choice| choice.as_str()),
            package_name: &project.package_name,
            framework: &project.framework.name,
            variant: project.variant.as_ref().map(|v| v.name.as_str()),
            sample: project.sample.as_ref().map(|s| s.name.as_str()),
            template: project.template(),
        }
    }
}

pub fn run(args: CreateArgs, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let registry = load_registry(&config)?;

    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let cwd = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| anyhow::anyhow!("Current directory is not valid UTF-8: {}", p.display()))?;

    let external = ExternalArgs {
        target_dir: args.target_dir,
        template: args.template,
        sample: args.sample,
        overwrite: args.overwrite,
    };

    let chain = QuestionChain::new(&registry, cwd)
        .with_presenter(ConsolePresenter::new(config.display.color_enabled))
        .with_default_project_name(config.default_project_name.clone());
    let mut prompter = DialoguerPrompter::new();

    let project = match chain.run(&external, &mut prompter)? {
        ChainOutcome::Completed(project) => project,
        ChainOutcome::Cancelled(reason) => {
            tracing::debug!(?reason, "Project creation cancelled");
            output::error(&reason.to_string());
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&CreateJson::from(&project))?);
    } else {
        print_summary(&project);
    }

    Ok(())
}

fn print_summary(project: &ResolvedProject) {
    output::header("Project");
    output::kv("Target directory", &project.target_dir);
    output::kv("Package name", &project.package_name);
    output::kv("Template", project.template());
    if let Some(sample) = &project.sample {
        output::kv("Sample", sample.label());
    }
    if let Some(choice) = project.overwrite {
        output::kv("Existing files", choice.title());
    }

    println!();
    output::success(&format!(
        "Resolved {} for {}",
        project.template(),
        project.package_name
    ));

    output::header("Next steps");
    if project.target_dir != "." {
        println!("  cd {}", quote_dir(&project.target_dir));
    }
    println!("  npm install");
    println!("  npm run dev");
}

/// Quote directories containing spaces so the hint can be pasted
fn quote_dir(dir: &str) -> String {
    if dir.contains(char::is_whitespace) {
        format!("\"{}\"", dir)
    } else {
        dir.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiln_projects::{Framework, OverwriteChoice, Sample, Variant};

    fn project() -> ResolvedProject {
        let sample = Sample {
            name: "counter".to_string(),
            display: Some("Counter".to_string()),
            color: "green".to_string(),
        };
        let variant = Variant {
            name: "vue-tailwind".to_string(),
            display: None,
            color: "cyan".to_string(),
            samples: vec![sample.clone()],
        };
        ResolvedProject {
            project_name: None,
            target_dir: "my app".to_string(),
            overwrite: Some(OverwriteChoice::Ignore),
            package_name: "my-app".to_string(),
            framework: Framework {
                name: "vue".to_string(),
                display: Some("Vue".to_string()),
                color: "green".to_string(),
                variants: vec![variant.clone()],
            },
            variant: Some(variant),
            sample: Some(sample),
        }
    }

    #[test]
    fn test_json_uses_identifiers() {
        let project = project();
        let json = serde_json::to_value(CreateJson::from(&project)).unwrap();

        assert_eq!(json["targetDir"], "my app");
        assert_eq!(json["packageName"], "my-app");
        assert_eq!(json["framework"], "vue");
        assert_eq!(json["variant"], "vue-tailwind");
        assert_eq!(json["sample"], "counter");
        assert_eq!(json["template"], "vue-tailwind");
        assert_eq!(json["overwrite"], "ignore");
        assert!(json["projectName"].is_null());
    }

    #[test]
    fn test_quote_dir() {
        assert_eq!(quote_dir("my-app"), "my-app");
        assert_eq!(quote_dir("my app"), "\"my app\"");
    }
}
