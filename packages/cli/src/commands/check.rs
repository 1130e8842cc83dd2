//! `blueprint check` - validate every link endpoint in a document.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use colored::Colorize;

use blueprint_editor::Document;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Document to check
    pub path: PathBuf,
}

pub fn check(args: CheckArgs) -> Result<(), anyhow::Error> {
    let doc = Document::open(args.path.clone());
    let report = doc.check();

    if report.ok() {
        println!("{} {}", "OK".green().bold(), args.path.display());
        return Ok(());
    }

    println!("{} {}", "Broken links".red().bold(), args.path.display());
    for id in &report.broken_links {
        println!("  link {} has an unresolved endpoint", id);
    }
    bail!("{} broken link(s)", report.broken_links.len());
}
