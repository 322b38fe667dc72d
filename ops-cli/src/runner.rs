use std::io::{BufRead, Write};

use colored::*;
use error_common::{log_error, Result, RustCareError};
use workflow_engine::{AdmissionRecord, AdmissionWorkflow};

use crate::menu::{menu_text, parse_selection, INVALID_CHOICE, PROMPT};

/// Show the menu, read one selection and admit the matching sample patient.
///
/// Returns `Ok(None)` for an integer that is not on the menu. Input that is
/// not an integer is an error and no admission takes place.
pub fn run_admission<R, W>(
    input: &mut R,
    output: &mut W,
    workflow: &AdmissionWorkflow,
) -> Result<Option<AdmissionRecord>>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{}{}", menu_text(), PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let Some(choice) = parse_selection(&line)? else {
        tracing::warn!(selection = line.trim(), "Unrecognized patient type selected");
        writeln!(output, "{INVALID_CHOICE}")?;
        return Ok(None);
    };

    tracing::info!(%choice, strategy = %choice.strategy(), "Patient type selected");
    writeln!(output)?;
    let record = workflow.admit_patient(choice.sample_patient(), choice.strategy(), output)?;

    Ok(Some(record))
}

/// Hold the terminal open until the operator presses Enter (or input ends).
pub fn wait_for_exit<R, W>(input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "\nPress Enter to exit...")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Report an error that ends the run. Pending stdout is flushed first so the
/// error line follows everything already printed.
pub fn report_fatal<O, E>(stdout: &mut O, stderr: &mut E, error: &RustCareError)
where
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    log_error("hospital-admission", error);
    if let Err(flush_err) = stdout.flush() {
        tracing::warn!(error = %flush_err, "Failed to flush stdout before reporting fatal error");
    }
    if let Err(write_err) = writeln!(stderr, "{} [{}] {}", "error:".bright_red().bold(), error.code(), error) {
        tracing::warn!(error = %write_err, "Failed to write fatal error to stderr");
    }
}
