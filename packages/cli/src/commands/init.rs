use crate::config::{Config, DEFAULT_CONFIG_NAME};
use crate::project::Project;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_editor::{templates, Action};
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Start from a template (see `pagesmith templates`)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, dir: &Path) -> Result<()> {
    let config_path = dir.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    // Resolve the template before touching the disk
    let template = args.template.as_deref().map(templates::select).transpose()?;

    println!(
        "{}",
        "📝 Initializing Pagesmith project...".bright_blue().bold()
    );

    fs::create_dir_all(dir)?;
    let config = Config::default();
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let mut project = Project::open(dir)?;
    if let Some(template) = template {
        project.store.dispatch(Action::LoadTemplate(template));
        println!(
            "  {} Loaded template {}",
            "✓".green(),
            args.template.unwrap_or_default().bright_white()
        );
    } else if project.restored {
        println!("  {} Kept existing project", "✓".green());
    }

    project.save()?;
    println!(
        "  {} Saved {}",
        "✓".green(),
        project.project_file().display()
    );
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: pagesmith suggest");
    println!("  2. Write an actions file and run: pagesmith apply actions.json");
    println!("  3. Run: pagesmith render --code");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_with_template() {
        let dir = tempfile::tempdir().unwrap();
        init(
            InitArgs {
                template: Some("portfolio".into()),
                force: false,
            },
            dir.path(),
        )
        .unwrap();

        assert!(dir.path().join(DEFAULT_CONFIG_NAME).exists());
        let project = Project::open(dir.path()).unwrap();
        assert!(project.restored);
        assert_eq!(project.store.present().metadata.title, "Mara Quinn Photography");
    }

    #[test]
    fn test_unknown_template_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let result = init(
            InitArgs {
                template: Some("blog".into()),
                force: false,
            },
            dir.path(),
        );

        assert!(result.is_err());
        assert!(!dir.path().join(DEFAULT_CONFIG_NAME).exists());
    }
}
