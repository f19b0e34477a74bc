use crate::project::Project;
use anyhow::{anyhow, Result};
use clap::Args;
use pagesmith_editor::{Pipeline, Preview, PreviewMode, PreviewRequest, SelectionOptions};
use pagesmith_model::Breakpoint;
use std::path::Path;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page to render (defaults to the active page)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Breakpoint (desktop, tablet, mobile); defaults to the configured one
    #[arg(short, long)]
    pub breakpoint: Option<Breakpoint>,

    /// Print the markup code view instead of the virtual DOM
    #[arg(long)]
    pub code: bool,

    /// Highlight this element as selected
    #[arg(long)]
    pub selected: Option<String>,
}

pub fn render(args: RenderArgs, dir: &Path) -> Result<()> {
    let project = Project::open(dir)?;
    println!("{}", render_to_string(&project, args)?);
    Ok(())
}

fn render_to_string(project: &Project, args: RenderArgs) -> Result<String> {
    if let Some(page_id) = &args.page {
        if project.store.present().page(page_id).is_none() {
            return Err(anyhow!("Page not found: {}", page_id));
        }
    }

    let request = PreviewRequest {
        page_id: args.page,
        breakpoint: args
            .breakpoint
            .unwrap_or(project.config.default_breakpoint),
        selection: args
            .selected
            .map(SelectionOptions::selected)
            .unwrap_or_default(),
        mode: if args.code {
            PreviewMode::Code
        } else {
            PreviewMode::Visual
        },
    };

    match Pipeline::new().render(&project.store, &request) {
        Preview::Tree(vdom) => Ok(serde_json::to_string_pretty(&vdom)?),
        Preview::Markup(html) => Ok(html),
    }
}
