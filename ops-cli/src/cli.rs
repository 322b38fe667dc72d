use clap::{Parser, ValueEnum};
use logger_redacted::{LogFormat, LoggerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Hospital patient admission
#[derive(Parser, Debug)]
#[command(name = "hospital-admission")]
#[command(about = "Admit one patient: compute the bill, print the receipt, send the notification")]
#[command(version)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty, env = "HOSPITAL_ADMISSION_LOG_FORMAT")]
    pub log_format: LogFormatArg,

    /// Log patient names in clear text
    #[arg(long)]
    pub no_redaction: bool,

    /// Exit without waiting for a final Enter
    #[arg(long)]
    pub no_pause: bool,
}

impl Args {
    pub fn logger_config(&self) -> LoggerConfig {
        let level = if self.verbose { "debug" } else { "warn" };
        let mut config = LoggerConfig::default()
            .with_level(level)
            .with_format(self.log_format.into());
        config.redaction_enabled = !self.no_redaction;
        config
    }
}
