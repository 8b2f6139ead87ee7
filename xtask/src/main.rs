//! Build automation tasks for cuejump
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use cuejump::cli::Cli as CuejumpCli;

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

/// Render one man page per command: the top-level page plus a page for
/// each subcommand, named `cuejump-<subcommand>`.
fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", out_dir))?;

    let command = CuejumpCli::command();

    render_page(command.clone(), &out_dir.join("cuejump.1"))?;
    for sub in command.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        let name = format!("cuejump-{}", sub.get_name());
        let path = out_dir.join(format!("{}.1", name));
        render_page(sub.clone().name(name), &path)?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn render_page(command: clap::Command, path: &Path) -> Result<()> {
    let man = Man::new(command);
    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .with_context(|| format!("Failed to render man page: {:?}", path))?;
    fs::write(path, buffer).with_context(|| format!("Failed to write man page: {:?}", path))?;
    Ok(())
}
