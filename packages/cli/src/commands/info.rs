//! `blueprint info` - summarize a document.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use blueprint_editor::Document;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Document to summarize
    pub path: PathBuf,
}

pub fn info(args: InfoArgs) -> Result<(), anyhow::Error> {
    let doc = Document::open(args.path);
    let graph = doc.graph();

    let pins: usize = graph
        .nodes
        .iter()
        .map(|n| n.inputs.len() + n.outputs.len())
        .sum();

    println!("{} {}", "Blueprint".cyan().bold(), doc.name());
    println!("  nodes:   {}", graph.nodes.len());
    println!("  pins:    {}", pins);
    println!("  links:   {}", graph.links.len());
    println!("  next id: {}", graph.next_id);

    for node in &graph.nodes {
        println!(
            "  - [{}] {} ({} in / {} out) at ({}, {})",
            node.id,
            node.title,
            node.inputs.len(),
            node.outputs.len(),
            node.pos.x,
            node.pos.y
        );
    }

    Ok(())
}
