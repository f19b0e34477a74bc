use crate::project::Project;
use anyhow::{bail, Result};
use colored::Colorize;
use pagesmith_model::validate_content;
use std::path::Path;

pub fn check(dir: &Path) -> Result<()> {
    let project = Project::open(dir)?;
    let problems = collect_problems(&project);

    println!("🔍 {} {}", "Checking".green().bold(), project.project_file().display());
    if problems.is_empty() {
        println!("   {} No issues found!", "✓".green());
        return Ok(());
    }

    for problem in &problems {
        println!("   {} {}", "error".red().bold(), problem);
    }
    bail!("{} problem(s) found", problems.len())
}

fn collect_problems(project: &Project) -> Vec<String> {
    let doc = project.store.present();
    let mut problems: Vec<String> = doc
        .check_invariants()
        .iter()
        .map(ToString::to_string)
        .collect();

    for page in &doc.pages {
        for element in &page.elements {
            if let Err(e) = validate_content(element.element_type, &element.content) {
                problems.push(format!("{} on page '{}': {}", element.id, page.id, e));
            }
        }
    }
    problems
}
