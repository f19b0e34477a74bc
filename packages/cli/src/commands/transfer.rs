use crate::project::Project;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output directory (defaults to the configured export dir)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Project JSON file to import
    pub file: PathBuf,
}

pub fn export(args: ExportArgs, dir: &Path) -> Result<()> {
    let project = Project::open(dir)?;
    let path = export_to(&project, args.out)?;

    println!("{} Exported {}", "✓".green(), path.display());
    Ok(())
}

fn export_to(project: &Project, out: Option<PathBuf>) -> Result<PathBuf> {
    let out_dir = out.unwrap_or_else(|| project.config.get_export_dir(&project.dir));
    fs::create_dir_all(&out_dir)?;

    let artifact = project.gateway().export(&project.store);
    let path = out_dir.join(&artifact.file_name);
    fs::write(&path, artifact.to_json()?)?;
    Ok(path)
}

pub fn import(args: ImportArgs, dir: &Path) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Cannot read {}", args.file.display()))?;

    let mut project = Project::open(dir)?;
    project.import(&text)?;
    project.save()?;

    let doc = project.store.present();
    println!(
        "{} Imported {} ({} page(s), {} element(s))",
        "✓".green(),
        doc.metadata.title.bright_white(),
        doc.pages.len(),
        doc.element_count()
    );
    Ok(())
}
