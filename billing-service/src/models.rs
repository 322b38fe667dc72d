use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily rate charged to an in-patient
pub const IN_PATIENT_DAILY_RATE: i64 = 2000;
/// Flat fee for an out-patient visit
pub const OUT_PATIENT_FEE: i64 = 500;
/// Flat fee for an emergency admission
pub const EMERGENCY_FEE: i64 = 5000;

/// Patient category and the data its bill rule needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PatientKind {
    InPatient { days_admitted: u32 },
    OutPatient,
    Emergency,
}

impl PatientKind {
    /// Bill for this category, before any strategy is applied
    pub fn base_bill(&self) -> Decimal {
        match self {
            PatientKind::InPatient { days_admitted } => {
                Decimal::from(*days_admitted) * Decimal::from(IN_PATIENT_DAILY_RATE)
            }
            PatientKind::OutPatient => Decimal::from(OUT_PATIENT_FEE),
            PatientKind::Emergency => Decimal::from(EMERGENCY_FEE),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PatientKind::InPatient { .. } => "InPatient",
            PatientKind::OutPatient => "OutPatient",
            PatientKind::Emergency => "EmergencyPatient",
        }
    }
}

impl fmt::Display for PatientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatientKind::InPatient { days_admitted } => {
                write!(f, "{} ({} days)", self.label(), days_admitted)
            }
            _ => f.write_str(self.label()),
        }
    }
}

/// Patient presented for admission. The id is assigned by the caller and
/// is not checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub kind: PatientKind,
}

impl Patient {
    pub fn new(id: i64, name: impl Into<String>, kind: PatientKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    pub fn in_patient(id: i64, name: impl Into<String>, days_admitted: u32) -> Self {
        Self::new(id, name, PatientKind::InPatient { days_admitted })
    }

    pub fn out_patient(id: i64, name: impl Into<String>) -> Self {
        Self::new(id, name, PatientKind::OutPatient)
    }

    pub fn emergency(id: i64, name: impl Into<String>) -> Self {
        Self::new(id, name, PatientKind::Emergency)
    }

    /// Compute the bill from this patient's own attributes.
    pub fn calculate_bill(&self) -> Decimal {
        self.kind.base_bill()
    }

    /// Run the bill calculation once and keep its result. A bill amount is
    /// only reachable through the returned [`BilledPatient`].
    pub fn into_billed(self) -> BilledPatient {
        let bill_amount = self.calculate_bill();
        BilledPatient {
            patient: self,
            bill_amount,
        }
    }
}

/// Patient whose bill has been calculated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BilledPatient {
    patient: Patient,
    bill_amount: Decimal,
}

impl BilledPatient {
    pub fn patient(&self) -> &Patient {
        &self.patient
    }

    pub fn bill_amount(&self) -> Decimal {
        self.bill_amount
    }

    pub fn id(&self) -> i64 {
        self.patient.id
    }

    pub fn name(&self) -> &str {
        &self.patient.name
    }

    pub fn kind(&self) -> PatientKind {
        self.patient.kind
    }
}
