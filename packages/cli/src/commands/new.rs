//! `blueprint new` - scaffold a fresh document on disk.

use std::path::PathBuf;

use anyhow::bail;
use clap::Args;
use colored::Colorize;

use blueprint_editor::Document;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Path of the document to create (e.g. adder.blueprint)
    pub path: PathBuf,
}

pub fn new(args: NewArgs) -> Result<(), anyhow::Error> {
    if args.path.exists() {
        bail!("refusing to overwrite existing file: {}", args.path.display());
    }

    // Opening a missing path yields the starter graph; saving materializes it.
    let mut doc = Document::open(args.path.clone());
    doc.save()?;

    println!(
        "{} {} ({} nodes)",
        "Created".green().bold(),
        args.path.display(),
        doc.graph().nodes.len()
    );

    Ok(())
}
