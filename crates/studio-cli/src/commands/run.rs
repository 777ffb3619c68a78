use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use studio_core::io::image_io::auto_save_path;
use studio_core::script::config::{EditScript, EditStep};
use studio_core::script::{run_script_reported, ProgressReporter};

use crate::summary::print_script_summary;

#[derive(Args)]
pub struct RunArgs {
    /// Edit script (TOML)
    pub script: PathBuf,

    /// Override the script's input image
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Override the script's output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_step(&self, _index: usize, step: &EditStep) {
        self.bar.set_message(step.to_string());
    }

    fn finish_step(&self, index: usize) {
        self.bar.set_position(index as u64 + 1);
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let mut script: EditScript = toml::from_str(&contents).context("Invalid edit script")?;
    if let Some(ref input) = args.input {
        script.input = input.clone();
    }
    if let Some(ref output) = args.output {
        script.output = output.clone();
    }
    script.validate().context("Invalid edit script")?;

    print_script_summary(&script);

    let bar = ProgressBar::new(script.steps.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:40} [{bar:30}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = BarReporter { bar };

    let document = run_script_reported(&script, &reporter)
        .with_context(|| format!("Failed to run {}", args.script.display()))?;
    reporter.bar.finish_with_message("Done");

    if let Some(raster) = document.current() {
        println!(
            "\n{}x{} result saved to {} (undo {}, redo {})",
            raster.width(),
            raster.height(),
            auto_save_path(&script.output).display(),
            document.undo_depth(),
            document.redo_depth()
        );
    }

    Ok(())
}
