use std::fmt;

use billing_service::{BillingStrategy, Patient};
use error_common::{Result, RustCareError};

pub const MENU_TITLE: &str = "===== Hospital Patient Admission =====";
pub const PROMPT: &str = "Enter patient type (1-3): ";
pub const INVALID_CHOICE: &str = "Invalid choice";

/// Patient types offered on the admission menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientChoice {
    InPatient,
    OutPatient,
    Emergency,
}

impl PatientChoice {
    pub const ALL: [PatientChoice; 3] = [
        PatientChoice::InPatient,
        PatientChoice::OutPatient,
        PatientChoice::Emergency,
    ];

    pub fn number(self) -> i64 {
        match self {
            PatientChoice::InPatient => 1,
            PatientChoice::OutPatient => 2,
            PatientChoice::Emergency => 3,
        }
    }

    pub fn from_selection(selection: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.number() == selection)
    }

    /// Fixed demonstration patient for this menu entry
    pub fn sample_patient(self) -> Patient {
        match self {
            PatientChoice::InPatient => Patient::in_patient(1, "John", 3),
            PatientChoice::OutPatient => Patient::out_patient(2, "Alice"),
            PatientChoice::Emergency => Patient::emergency(3, "Mark"),
        }
    }

    pub fn strategy(self) -> BillingStrategy {
        match self {
            PatientChoice::InPatient => BillingStrategy::Insurance,
            PatientChoice::OutPatient => BillingStrategy::Regular,
            PatientChoice::Emergency => BillingStrategy::Emergency,
        }
    }
}

impl fmt::Display for PatientChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PatientChoice::InPatient => "InPatient",
            PatientChoice::OutPatient => "OutPatient",
            PatientChoice::Emergency => "Emergency",
        };
        f.write_str(label)
    }
}

pub fn menu_text() -> String {
    let mut text = format!("{MENU_TITLE}\n");
    for choice in PatientChoice::ALL {
        text.push_str(&format!("{}. {}\n", choice.number(), choice));
    }
    text
}

/// Parse the operator's selection into a menu entry.
///
/// Any integer is accepted, however large; integers that are not on the
/// menu yield `Ok(None)`. Text that is not an integer is a fatal input error.
pub fn parse_selection(line: &str) -> Result<Option<PatientChoice>> {
    let trimmed = line.trim();
    let digits = trimmed.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RustCareError::InputError(format!("'{trimmed}' is not a valid number")));
    }

    // Out of i64 range cannot be a menu number.
    Ok(trimmed.parse::<i64>().ok().and_then(PatientChoice::from_selection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_three_choices() {
        let text = menu_text();
        assert!(text.contains("1. InPatient"));
        assert!(text.contains("2. OutPatient"));
        assert!(text.contains("3. Emergency"));
    }

    #[test]
    fn test_selection_mapping() {
        assert_eq!(PatientChoice::from_selection(1), Some(PatientChoice::InPatient));
        assert_eq!(PatientChoice::from_selection(2), Some(PatientChoice::OutPatient));
        assert_eq!(PatientChoice::from_selection(3), Some(PatientChoice::Emergency));
        assert_eq!(PatientChoice::from_selection(0), None);
        assert_eq!(PatientChoice::from_selection(9), None);
        assert_eq!(PatientChoice::from_selection(-1), None);
    }

    #[test]
    fn test_sample_data_and_strategies() {
        let john = PatientChoice::InPatient.sample_patient();
        assert_eq!((john.id, john.name.as_str()), (1, "John"));
        assert_eq!(PatientChoice::InPatient.strategy(), BillingStrategy::Insurance);
        assert_eq!(PatientChoice::OutPatient.strategy(), BillingStrategy::Regular);
        assert_eq!(PatientChoice::Emergency.strategy(), BillingStrategy::Emergency);
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection(" 2\n").unwrap(), Some(PatientChoice::OutPatient));
        assert_eq!(parse_selection("+3").unwrap(), Some(PatientChoice::Emergency));
        assert_eq!(parse_selection("9").unwrap(), None);
        assert_eq!(parse_selection("-1").unwrap(), None);
        assert!(matches!(parse_selection("two"), Err(RustCareError::InputError(_))));
        assert!(matches!(parse_selection("1.5"), Err(RustCareError::InputError(_))));
        assert!(matches!(parse_selection("-"), Err(RustCareError::InputError(_))));
        assert!(matches!(parse_selection(""), Err(RustCareError::InputError(_))));
    }

    #[test]
    fn test_integers_beyond_i64_are_off_menu() {
        assert_eq!(parse_selection("99999999999999999999").unwrap(), None);
        assert_eq!(parse_selection("-99999999999999999999").unwrap(), None);
    }
}
