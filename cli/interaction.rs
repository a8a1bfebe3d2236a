use anyhow::Result;
use console::style;
use dialoguer::Confirm;
use std::path::PathBuf;

const PREVIEW_LIMIT: usize = 5;

fn preview_lines(files: &[PathBuf]) -> Vec<String> {
    let mut lines: Vec<String> = files
        .iter()
        .take(PREVIEW_LIMIT)
        .map(|f| format!("  {}", f.display()))
        .collect();
    if files.len() > PREVIEW_LIMIT {
        lines.push(format!("  ... and {} more", files.len() - PREVIEW_LIMIT));
    }
    lines
}

/// Shows which files are about to be overwritten and asks once. Escape or
/// `n` leaves every file untouched.
pub fn confirm_rewrite(files: &[PathBuf], suffix: &str) -> Result<bool> {
    if files.is_empty() {
        println!("No {} files found.", suffix);
        return Ok(false);
    }

    for line in preview_lines(files) {
        println!("{}", style(line).dim());
    }

    let answer = Confirm::new()
        .with_prompt(format!(
            "Overwrite {} {} files without their comments? There is no backup.",
            style(files.len()).cyan(),
            suffix
        ))
        .default(false)
        .interact_opt()?;

    let confirmed = answer.unwrap_or(false);
    if !confirmed {
        println!("{}", style("Nothing was changed.").yellow());
    }
    Ok(confirmed)
}
