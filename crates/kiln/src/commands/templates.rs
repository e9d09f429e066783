//! Template registry inspection commands

use anyhow::Result;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::{load_config, load_registry};
use crate::cli::{GlobalArgs, TemplatesCommands, TemplatesListArgs, TemplatesResolveArgs};
use crate::output;
use kiln_projects::TemplateRegistry;

pub fn run(cmd: TemplatesCommands, globals: &GlobalArgs) -> Result<()> {
    let config = load_config(globals)?;
    let registry = load_registry(&config)?;

    match cmd {
        TemplatesCommands::List(args) => list(&registry, args),
        TemplatesCommands::Resolve(args) => resolve(&registry, args),
    }
}

// ============================================================================
// List Command
// ============================================================================

#[derive(Tabled)]
struct TemplateRow {
    template: String,
    framework: String,
    #[tabled(rename = "variant")]
    label: String,
    samples: String,
}

#[derive(Serialize)]
struct TemplateListJson {
    template: String,
    framework: String,
    variant: Option<String>,
    samples: Vec<String>,
}

fn template_rows(registry: &TemplateRegistry) -> Vec<TemplateListJson> {
    registry
        .entries()
        .into_iter()
        .map(|entry| TemplateListJson {
            template: entry.identifier().to_string(),
            framework: entry.framework.name.clone(),
            variant: entry.variant.map(|v| v.name.clone()),
            samples: entry
                .variant
                .map(|v| v.samples.iter().map(|s| s.name.clone()).collect())
                .unwrap_or_default(),
        })
        .collect()
}

/// List every registered template
fn list(registry: &TemplateRegistry, args: TemplatesListArgs) -> Result<()> {
    let rows = template_rows(registry);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let table_rows: Vec<TemplateRow> = registry
        .entries()
        .into_iter()
        .zip(rows)
        .map(|(entry, row)| TemplateRow {
            template: row.template,
            framework: entry.framework.label().to_string(),
            label: entry.variant.map(|v| v.label().to_string()).unwrap_or_default(),
            samples: if row.samples.is_empty() {
                "-".to_string()
            } else {
                row.samples.join(", ")
            },
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::sharp());
    println!("{}", table);

    Ok(())
}

// ============================================================================
// Resolve Command
// ============================================================================

/// Print the canonical identifier for a name or tag list
fn resolve(registry: &TemplateRegistry, args: TemplatesResolveArgs) -> Result<()> {
    match registry.resolve(Some(&args.input)) {
        Some(id) => {
            println!("{}", id);
            Ok(())
        }
        None => {
            output::error(&format!("\"{}\" doesn't match any template", args.input));
            output::info("Run 'kiln templates list' to see available templates");
            std::process::exit(1);
        }
    }
}
