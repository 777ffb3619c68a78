use tracing::info;

use crate::document::Document;
use crate::error::{Result, StudioError};
use crate::io::image_io::{load_raster, save_auto, save_with_quality};
use crate::ops::Operation;

use super::config::{EditScript, EditStep};
use super::types::{NoOpReporter, ProgressReporter};

/// Run an edit script and return the final document.
pub fn run_script(script: &EditScript) -> Result<Document> {
    run_script_reported(script, &NoOpReporter)
}

/// Run an edit script, reporting each step.
pub fn run_script_reported(
    script: &EditScript,
    reporter: &dyn ProgressReporter,
) -> Result<Document> {
    script.validate()?;

    let raster = load_raster(&script.input)?;
    let label = script
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    let mut document = match script.history_capacity {
        Some(capacity) => Document::with_history_capacity(capacity),
        None => Document::new(),
    };
    document.load(&raster, label);

    info!(steps = script.steps.len(), "Running edit script");
    for (index, step) in script.steps.iter().enumerate() {
        reporter.begin_step(index, step);
        match step {
            EditStep::Apply { operations } => {
                document.apply(&Operation::pipeline(operations.clone()));
            }
            EditStep::Undo => document.undo(),
            EditStep::Redo => document.redo(),
            EditStep::Revert => document.revert(),
        }
        reporter.finish_step(index);
    }

    let current = document
        .current()
        .ok_or_else(|| StudioError::Script("no raster loaded".into()))?;
    let saved = match script.jpeg_quality {
        Some(quality) => save_with_quality(current, &script.output, quality)?,
        None => save_auto(current, &script.output)?,
    };
    info!(
        output = %saved.display(),
        undo = document.undo_depth(),
        redo = document.redo_depth(),
        "Edit script complete"
    );

    Ok(document)
}
