use crate::project::Project;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_linter::{analyze, analyze_all};
use pagesmith_model::SuggestionCategory;
use std::path::Path;

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Only run one category (structure, content, design, seo)
    #[arg(short, long)]
    pub category: Option<SuggestionCategory>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn suggest(args: SuggestArgs, dir: &Path) -> Result<()> {
    let project = Project::open(dir)?;
    let doc = project.store.present();

    let suggestions = match args.category {
        Some(category) => analyze(doc, category),
        None => analyze_all(doc),
    };

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    println!("💡 {} for {}", "Suggestions".green().bold(), doc.metadata.title.bright_white());
    println!();

    if suggestions.is_empty() {
        println!("   {} Nothing to improve right now!", "✓".green());
        return Ok(());
    }

    for suggestion in &suggestions {
        let confidence = format!("{:>3.0}%", suggestion.confidence * 100.0);
        let confidence = if suggestion.confidence >= 0.75 {
            confidence.red().bold()
        } else if suggestion.confidence >= 0.5 {
            confidence.yellow()
        } else {
            confidence.blue()
        };

        let target = suggestion
            .element_id
            .as_deref()
            .map(|id| format!(" ({})", id))
            .unwrap_or_default();

        println!(
            "  {} {}{}: {}",
            confidence,
            suggestion.suggestion_type.bright_white(),
            target.dimmed(),
            suggestion.description
        );
    }

    println!();
    println!("   Total: {}", suggestions.len());
    Ok(())
}
