//! Inspect an action tree and write its flat form.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use combo_content::{ActionTreeLoader, NamedActionTree};
use combo_core::ActionTreeNode;

/// Inspect an action tree and convert it to its flat form
#[derive(Parser)]
pub struct Tree {
    /// Authored action tree (RON); defaults to the bundled tree.
    /// Files ending in `.bin` or `.flat.ron` are read as flat trees.
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,

    /// Write the flat form here (`.bin` for bincode, anything else for RON)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl Tree {
    pub fn execute(self) -> Result<()> {
        let tree = match &self.path {
            None => ActionTreeLoader::embedded()?,
            Some(path) => match FileKind::of(path) {
                FileKind::Bincode => ActionTreeLoader::load_flat_bincode(path)?,
                FileKind::FlatRon => ActionTreeLoader::load_flat_ron(path)?,
                FileKind::Authored => ActionTreeLoader::load(path)?,
            },
        };

        print_tree(&tree);

        if let Some(output) = &self.output {
            match FileKind::of(output) {
                FileKind::Bincode => ActionTreeLoader::save_flat_bincode(&tree, output)?,
                FileKind::FlatRon => ActionTreeLoader::save_flat_ron(&tree, output)?,
                FileKind::Authored => {
                    bail!("Output {} must end in .bin or .flat.ron", output.display())
                }
            }
            tracing::info!(path = %output.display(), "wrote flat action tree");
        }
        Ok(())
    }
}

enum FileKind {
    Authored,
    FlatRon,
    Bincode,
}

impl FileKind {
    fn of(path: &std::path::Path) -> Self {
        let name = path.to_string_lossy();
        if name.ends_with(".bin") {
            Self::Bincode
        } else if name.ends_with(".flat.ron") {
            Self::FlatRon
        } else {
            Self::Authored
        }
    }
}

fn print_tree(tree: &NamedActionTree) {
    for (branch, roots) in tree.branches() {
        println!("{branch}");
        for root in roots {
            print_node(root, 1);
        }
    }
}

fn print_node(node: &ActionTreeNode<String>, depth: usize) {
    println!("{:indent$}{} -> {}", "", node.command, node.animation, indent = depth * 2);
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
