use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use error_common::{Result, RustCareError};
use events_bus::{ConsoleHandler, EventBus};
use logger_redacted::{init_logging, redactor_for};
use ops_cli::{report_fatal, run_admission, wait_for_exit, Args};
use workflow_engine::AdmissionWorkflow;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_fatal(&mut io::stdout(), &mut io::stderr(), &e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let logger_config = args.logger_config();
    init_logging(&logger_config).map_err(|e| RustCareError::ConfigError(e.to_string()))?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting hospital admission");

    let mut notifications = EventBus::new();
    notifications.subscribe_handler(ConsoleHandler::stdout());
    let workflow = AdmissionWorkflow::new(notifications).with_redactor(redactor_for(&logger_config));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Some(record) = run_admission(&mut input, &mut output, &workflow)? {
        info!(
            patient_id = record.patient_id,
            final_bill = %record.final_bill,
            notification_id = %record.notification_id,
            "Admission complete"
        );
    }

    if !args.no_pause {
        wait_for_exit(&mut input, &mut output)?;
    }

    Ok(())
}
