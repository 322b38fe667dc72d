use std::fmt;
use std::io::Write;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::BillingResult;
use crate::models::{BilledPatient, PatientKind};
use crate::strategy::BillingStrategy;

/// Printable record of what an admitted patient is charged
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub patient_id: i64,
    pub patient_name: String,
    pub kind: PatientKind,
    pub strategy: BillingStrategy,
    pub base_bill: Decimal,
    pub final_bill: Decimal,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    pub fn new(billed: &BilledPatient, strategy: BillingStrategy, final_bill: Decimal) -> Self {
        Self {
            patient_id: billed.id(),
            patient_name: billed.name().to_string(),
            kind: billed.kind(),
            strategy,
            base_bill: billed.bill_amount(),
            final_bill,
            issued_at: Utc::now(),
        }
    }

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> BillingResult<()> {
        write!(out, "{self}")?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Admission Receipt =====")?;
        writeln!(f, "Patient ID   : {}", self.patient_id)?;
        writeln!(f, "Patient Name : {}", self.patient_name)?;
        writeln!(f, "Patient Type : {}", self.kind)?;
        writeln!(f, "Base Bill    : {:.2}", self.base_bill)?;
        writeln!(f, "Strategy     : {}", self.strategy)?;
        writeln!(f, "Final Bill   : {:.2}", self.final_bill)?;
        writeln!(f, "Issued       : {}", self.issued_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
        writeln!(f, "=============================")
    }
}
