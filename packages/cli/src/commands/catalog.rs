use anyhow::Result;
use colored::Colorize;
use pagesmith_editor::templates;
use pagesmith_model::list_all;

pub fn templates() -> Result<()> {
    println!("{}", "Templates".bright_blue().bold());
    for info in templates::list() {
        println!(
            "  {:<12} {}  {}",
            info.id.bright_white().bold(),
            info.name,
            info.description.dimmed()
        );
    }
    println!();
    println!("Use: pagesmith init --template <id>");
    Ok(())
}

pub fn elements() -> Result<()> {
    println!("{}", "Elements".bright_blue().bold());
    for descriptor in list_all() {
        println!(
            "  {:<14} {:<14} [{}]",
            descriptor.element_type.as_str().bright_white().bold(),
            descriptor.display_name,
            descriptor.category.as_str().cyan()
        );
        println!("  {:<14} {}", "", descriptor.description.dimmed());
        println!("  {:<14} keys: {}", "", descriptor.content_keys.join(", "));
    }
    Ok(())
}
