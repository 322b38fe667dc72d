// Patterns below are literals; compiling them cannot fail.
#![allow(clippy::unwrap_used)]

use base64::{engine::general_purpose, Engine as _};
use lazy_static::lazy_static;
use regex::Regex;
use sha2::{Digest, Sha256};

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"(?:\+1[-.\s]?)?\(?\b[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b").unwrap();
    static ref SSN_REGEX: Regex = Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").unwrap();
}

pub const PATIENT_TOKEN_PREFIX: &str = "PATIENT";

/// PII redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub enabled: bool,
    pub redact_emails: bool,
    pub redact_phones: bool,
    pub redact_ssn: bool,
    pub hash_for_correlation: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            redact_emails: true,
            redact_phones: true,
            redact_ssn: true,
            hash_for_correlation: true,
        }
    }
}

/// PII redactor for log messages
#[derive(Debug, Clone, Default)]
pub struct PiiRedactor {
    config: RedactionConfig,
    identifiers: Vec<String>,
}

impl PiiRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self {
            config,
            identifiers: Vec::new(),
        }
    }

    /// Redactor that leaves text untouched
    pub fn disabled() -> Self {
        Self::new(RedactionConfig {
            enabled: false,
            ..Default::default()
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Copy of this redactor that also masks `name` wherever it appears.
    pub fn with_identifier(&self, name: &str) -> Self {
        let mut redactor = self.clone();
        if !name.trim().is_empty() {
            redactor.identifiers.push(name.to_string());
        }
        redactor
    }

    /// Token standing in for a patient name in log output
    pub fn redact_name(&self, name: &str) -> String {
        if !self.config.enabled {
            return name.to_string();
        }
        if self.config.hash_for_correlation {
            format!("{}[{}]", PATIENT_TOKEN_PREFIX, self.hash_value(name))
        } else {
            let initial: String = name.chars().take(1).collect();
            format!("{initial}***")
        }
    }

    pub fn redact(&self, text: &str) -> String {
        if !self.config.enabled {
            return text.to_string();
        }

        let mut result = text.to_string();

        for identifier in &self.identifiers {
            result = result.replace(identifier.as_str(), &self.redact_name(identifier));
        }

        if self.config.redact_emails {
            result = self.redact_matches(&EMAIL_REGEX, "EMAIL", "***@***", &result);
        }

        if self.config.redact_phones {
            result = self.redact_matches(&PHONE_REGEX, "PHONE", "(***) ***-****", &result);
        }

        if self.config.redact_ssn {
            result = self.redact_matches(&SSN_REGEX, "SSN", "***-**-****", &result);
        }

        result
    }

    fn redact_matches(&self, pattern: &Regex, label: &str, mask: &str, text: &str) -> String {
        pattern
            .replace_all(text, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("{}[{}]", label, self.hash_value(caps.get(0).map_or("", |m| m.as_str())))
                } else {
                    mask.to_string()
                }
            })
            .to_string()
    }

    fn hash_value(&self, value: &str) -> String {
        let digest = Sha256::digest(value.as_bytes());
        let prefix: Vec<u8> = digest.iter().take(8).copied().collect(); // short tokens
        general_purpose::STANDARD.encode(prefix)
    }
}
