// Admission steps
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionStep {
    CalculateBill,
    ApplyBilling,
    EmitReceipt,
    PublishNotification,
}

impl AdmissionStep {
    /// Execution order of an admission
    pub const ORDER: [AdmissionStep; 4] = [
        AdmissionStep::CalculateBill,
        AdmissionStep::ApplyBilling,
        AdmissionStep::EmitReceipt,
        AdmissionStep::PublishNotification,
    ];
}

impl fmt::Display for AdmissionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AdmissionStep::CalculateBill => "calculate_bill",
            AdmissionStep::ApplyBilling => "apply_billing",
            AdmissionStep::EmitReceipt => "emit_receipt",
            AdmissionStep::PublishNotification => "publish_notification",
        };
        f.write_str(name)
    }
}
