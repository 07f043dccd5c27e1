//! Workspace build tasks.
//!
//! ```text
//! cargo run -p showcase-xtask -- web [--release]
//! cargo run -p showcase-xtask -- serve
//! cargo run -p showcase-xtask -- timeline --samples 200 --out timeline.json
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Phone showcase build tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Bundle the web app with the Dioxus CLI.
    Web {
        /// Optimized build.
        #[arg(long)]
        release: bool,
    },
    /// Serve the web app with hot reload.
    Serve,
    /// Export the scroll timeline as JSON.
    Timeline {
        /// Number of intervals between progress 0 and 1.
        #[arg(long, default_value_t = 100)]
        samples: usize,
        /// Output file.
        #[arg(long, default_value = "target/timeline.json")]
        out: PathBuf,
    },
}

fn workspace_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask has no parent directory")
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {cmd:?}"))?;
    if !status.success() {
        bail!("{cmd:?} exited with {status}");
    }
    Ok(())
}

fn dx(root: &Path, args: &[&str]) -> Result<()> {
    run(Command::new("dx")
        .args(args)
        .args(["--package", "showcase-web", "--platform", "web"])
        .current_dir(root))
    .context("is the Dioxus CLI installed? (cargo install dioxus-cli)")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = workspace_root()?;

    match cli.task {
        Task::Web { release } => {
            let mut args = vec!["bundle"];
            if release {
                args.push("--release");
            }
            dx(&root, &args)
        }
        Task::Serve => dx(&root, &["serve"]),
        Task::Timeline { samples, out } => {
            let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".into());
            run(Command::new(cargo)
                .args(["run", "--quiet", "--bin", "showcase", "--", "timeline"])
                .arg("--samples")
                .arg(samples.to_string())
                .arg("--out")
                .arg(&out)
                .current_dir(&root))
        }
    }
}
