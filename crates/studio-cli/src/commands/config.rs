use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use studio_core::ops::Operation;
use studio_core::script::config::{EditScript, EditStep};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the script to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save an example edit script as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let script = EditScript {
        input: PathBuf::from("input.png"),
        output: PathBuf::from("result.png"),
        jpeg_quality: None,
        history_capacity: None,
        steps: vec![
            EditStep::Apply {
                operations: vec![
                    Operation::named("Grayscale"),
                    Operation::brightness(0.1),
                    Operation::contrast(0.2),
                ],
            },
            EditStep::Apply {
                operations: vec![Operation::gaussian_blur(2)],
            },
            EditStep::Undo,
        ],
    };
    let toml_str = toml::to_string_pretty(&script)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write script to {}", path.display()))?;
        println!("Default script saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
