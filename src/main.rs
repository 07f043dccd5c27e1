//! `showcase` command line: export the scroll timeline, the options schema,
//! or inspect a phone model.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use phone_showcase::error::ShowcaseError;
use phone_showcase::options::{Options, TypewriterOptions};
use phone_showcase::scene::PhoneModel;
use phone_showcase::scroll::{derive_visual_state, ScrollProgress};
use phone_showcase::typewriter::{TypewriterRunner, TypewriterScript};
use serde_json::json;
use web_time::{Duration, Instant};

/// Inspect and export the showcase's animation data.
#[derive(Parser)]
#[command(name = "showcase")]
struct Cli {
    /// Options TOML file (defaults apply when omitted).
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample the scroll mapping and write it as JSON.
    Timeline {
        /// Number of intervals between progress 0 and 1.
        #[arg(long, default_value_t = 100)]
        samples: u32,
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run the typewriter on a simulated clock and write every change.
    Typewriter {
        /// Simulated time span in milliseconds.
        #[arg(long, default_value_t = 10_000)]
        millis: u64,
        /// Clock tick in milliseconds.
        #[arg(long, default_value_t = 16)]
        tick: u64,
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the options JSON schema.
    Schema {
        /// Output file; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load a phone model and report its bounds.
    InspectModel {
        /// Path to a glTF binary.
        path: PathBuf,
    },
}

fn timeline(samples: u32) -> serde_json::Value {
    let samples = samples.max(1);
    let frames: Vec<_> = (0..=samples)
        .map(|i| {
            let progress = ScrollProgress::new(i as f32 / samples as f32);
            let state = derive_visual_state(progress);
            json!({
                "progress": progress.value(),
                "phase": format!("{:?}", state.phase),
                "phone": {
                    "visible": state.pose.visible,
                    "position_y": state.pose.position_y,
                    "rotation_x": state.pose.rotation_x,
                    "rotation_y": state.pose.rotation_y,
                },
                "main_title": {
                    "visible": state.overlays.main_title.visible,
                    "opacity": state.overlays.main_title.opacity,
                },
                "project_info": {
                    "visible": state.overlays.project_info.visible,
                    "opacity": state.overlays.project_info.opacity,
                },
                "coming_soon": {
                    "visible": state.overlays.coming_soon.visible,
                    "opacity": state.overlays.coming_soon.opacity,
                },
            })
        })
        .collect();
    json!({ "samples": samples, "frames": frames })
}

fn typewriter_trace(
    options: &TypewriterOptions,
    millis: u64,
    tick: u64,
) -> Result<serde_json::Value, ShowcaseError> {
    let script = TypewriterScript::from_options(options)?;
    let tick = tick.max(1);
    let start = Instant::now();
    let mut runner = TypewriterRunner::starting_at(script, start);

    let sample = |at: u64, runner: &TypewriterRunner| {
        json!({
            "at_ms": at,
            "stage": format!("{:?}", runner.state().stage),
            "text": runner.displayed(),
        })
    };
    let mut frames = vec![sample(0, &runner)];
    let mut elapsed = 0;
    while elapsed < millis && !runner.is_idle() {
        elapsed = (elapsed + tick).min(millis);
        if runner.poll(start + Duration::from_millis(elapsed)) {
            frames.push(sample(elapsed, &runner));
        }
    }
    Ok(json!({ "tick_ms": tick, "frames": frames }))
}

fn write_output(
    out: Option<&Path>,
    value: &serde_json::Value,
) -> Result<(), ShowcaseError> {
    let text = serde_json::to_string_pretty(value)?;
    match out {
        Some(path) => {
            std::fs::write(path, text)?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), ShowcaseError> {
    let options = match &cli.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    match cli.command {
        Command::Timeline { samples, out } => {
            write_output(out.as_deref(), &timeline(samples))
        }
        Command::Typewriter { millis, tick, out } => write_output(
            out.as_deref(),
            &typewriter_trace(&options.typewriter, millis, tick)?,
        ),
        Command::Schema { out } => {
            let schema = serde_json::to_value(Options::json_schema())?;
            write_output(out.as_deref(), &schema)
        }
        Command::InspectModel { path } => {
            let model = PhoneModel::load(&path, options.model.scale)?;
            let report = json!({
                "min": model.bounds.min.to_array(),
                "max": model.bounds.max.to_array(),
                "center": model.bounds.center().to_array(),
                "scale": model.scale,
                "scaled_size": model.scaled_size().to_array(),
            });
            write_output(None, &report)
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_covers_both_ends() {
        let value = timeline(10);
        let frames = value["frames"].as_array().unwrap();
        assert_eq!(frames.len(), 11);
        assert_eq!(frames[0]["phase"], "Intro");
        assert_eq!(frames[0]["main_title"]["opacity"], 1.0);
        assert_eq!(frames[10]["phase"], "Done");
        assert_eq!(frames[10]["coming_soon"]["opacity"], 1.0);
    }

    #[test]
    fn typewriter_trace_follows_clock_ticks() {
        let value =
            typewriter_trace(&TypewriterOptions::default(), 500, 16).unwrap();
        let frames = value["frames"].as_array().unwrap();
        assert_eq!(frames[0]["at_ms"], 0);
        assert_eq!(frames[0]["text"], "");
        // First character is due at 75 ms, seen on the 80 ms tick.
        assert_eq!(frames[1]["at_ms"], 80);
        assert_eq!(frames[1]["text"], "我");
        assert_eq!(frames[1]["stage"], "Typing");
    }

    #[test]
    fn typewriter_trace_rejects_empty_texts() {
        let options = TypewriterOptions {
            texts: Vec::new(),
            ..TypewriterOptions::default()
        };
        assert!(matches!(
            typewriter_trace(&options, 100, 16),
            Err(ShowcaseError::EmptyTypewriterTexts)
        ));
    }

    #[test]
    fn zero_samples_still_spans_the_page() {
        let value = timeline(0);
        assert_eq!(value["frames"].as_array().unwrap().len(), 2);
    }
}
