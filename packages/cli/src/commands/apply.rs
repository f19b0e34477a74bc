use crate::project::Project;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagesmith_editor::Action;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// JSON file holding an array of actions
    pub actions: PathBuf,

    /// Undo this many steps after applying (for trying edits out)
    #[arg(long, default_value_t = 0)]
    pub undo: usize,
}

pub fn apply(args: ApplyArgs, dir: &Path) -> Result<()> {
    let source = fs::read_to_string(&args.actions)
        .with_context(|| format!("Cannot read {}", args.actions.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&source)
        .with_context(|| format!("{} is not a list of actions", args.actions.display()))?;

    let mut project = Project::open(dir)?;
    let mut changed = 0;

    for action in actions {
        let name = action.name();
        if project.store.dispatch(action) {
            changed += 1;
            println!("  {} {}", "✓".green(), name);
        } else {
            println!("  {} {} {}", "·".dimmed(), name, "(no change)".dimmed());
        }
    }

    for _ in 0..args.undo {
        let description = project.store.undo_description().map(str::to_string);
        if !project.store.undo() {
            break;
        }
        println!(
            "  {} undo {}",
            "↶".yellow(),
            description.unwrap_or_default()
        );
    }

    project.save()?;

    println!();
    println!(
        "✨ {} {} change(s) applied",
        "Done".green().bold(),
        changed
    );
    println!(
        "   History: {} undo / {} redo level(s)",
        project.store.undo_levels(),
        project.store.redo_levels()
    );

    let violations = project.store.present().check_invariants();
    if !violations.is_empty() {
        println!(
            "   {} {} invariant issue(s); run `pagesmith check`",
            "⚠️".yellow(),
            violations.len()
        );
    }

    Ok(())
}
