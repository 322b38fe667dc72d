use std::io::Write;

use billing_service::{BillingService, BillingStrategy, Decimal, Patient, PatientKind, Receipt};
use events_bus::{Event, EventBus};
use logger_redacted::{redacted_info, PiiRedactor};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::step::AdmissionStep;

pub const PATIENT_ADMITTED: &str = "patient.admitted";

/// Notification text published for an admitted patient
pub fn admission_message(name: &str) -> String {
    format!("Patient {name} admitted successfully.")
}

/// Outcome of a completed admission
#[derive(Debug, Clone, Serialize)]
pub struct AdmissionRecord {
    pub patient_id: i64,
    pub patient_name: String,
    pub kind: PatientKind,
    pub strategy: BillingStrategy,
    pub base_bill: Decimal,
    pub final_bill: Decimal,
    pub receipt: Receipt,
    pub notification_id: Uuid,
    pub notified_subscribers: usize,
    pub steps: Vec<AdmissionStep>,
}

/// Admits patients: bills them, writes the receipt and announces the admission
pub struct AdmissionWorkflow {
    billing: BillingService,
    notifications: EventBus,
    redactor: PiiRedactor,
}

impl AdmissionWorkflow {
    pub fn new(notifications: EventBus) -> Self {
        Self {
            billing: BillingService::new(),
            notifications,
            redactor: PiiRedactor::default(),
        }
    }

    pub fn with_redactor(mut self, redactor: PiiRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub fn notifications(&self) -> &EventBus {
        &self.notifications
    }

    /// Run one admission. The receipt is written to `out`; subscribers of
    /// the notification channel hear about it once the receipt is out.
    pub fn admit_patient<W>(
        &self,
        patient: Patient,
        strategy: BillingStrategy,
        out: &mut W,
    ) -> Result<AdmissionRecord>
    where
        W: Write + ?Sized,
    {
        let log = self.redactor.with_identifier(&patient.name);
        let patient_token = self.redactor.redact_name(&patient.name);
        let span = tracing::info_span!(
            "admit_patient",
            patient_id = patient.id,
            patient = %patient_token,
            kind = patient.kind.label(),
            %strategy
        );
        let _enter = span.enter();
        let mut steps = Vec::with_capacity(AdmissionStep::ORDER.len());

        let billed = patient.into_billed();
        steps.push(AdmissionStep::CalculateBill);
        tracing::debug!(step = %AdmissionStep::CalculateBill, base_bill = %billed.bill_amount());

        let final_bill = self
            .billing
            .apply_billing(billed.bill_amount(), strategy.function());
        steps.push(AdmissionStep::ApplyBilling);
        tracing::debug!(step = %AdmissionStep::ApplyBilling, %final_bill);

        let receipt = Receipt::new(&billed, strategy, final_bill);
        receipt.write_to(out)?;
        steps.push(AdmissionStep::EmitReceipt);
        tracing::debug!(step = %AdmissionStep::EmitReceipt);

        let message = admission_message(billed.name());
        let event = Event::new(PATIENT_ADMITTED, message.as_str()).with_data(serde_json::json!({
            "patient_id": billed.id(),
            "patient_type": billed.kind().label(),
            "strategy": strategy,
            "final_bill": final_bill.to_string(),
        }));
        let notified_subscribers = self.notifications.publish(&event)?;
        steps.push(AdmissionStep::PublishNotification);
        redacted_info!(log, "{} (notified {} subscribers)", message, notified_subscribers);

        Ok(AdmissionRecord {
            patient_id: billed.id(),
            patient_name: billed.name().to_string(),
            kind: billed.kind(),
            strategy,
            base_bill: billed.bill_amount(),
            final_bill,
            receipt,
            notification_id: event.id,
            notified_subscribers,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use events_bus::EventBusError;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    fn capturing_bus() -> (EventBus, Rc<RefCell<Vec<String>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let mut bus = EventBus::new();
        bus.subscribe(move |event: &Event| {
            sink.borrow_mut().push(event.message.clone());
            Ok(())
        });
        (bus, received)
    }

    #[test]
    fn test_admission_message_format() {
        assert_eq!(admission_message("John"), "Patient John admitted successfully.");
    }

    #[test]
    fn test_in_patient_with_insurance() {
        let (bus, received) = capturing_bus();
        let workflow = AdmissionWorkflow::new(bus);
        let mut out = Vec::new();

        let record = workflow
            .admit_patient(Patient::in_patient(1, "John", 3), BillingStrategy::Insurance, &mut out)
            .unwrap();

        assert_eq!(record.base_bill, Decimal::from(6000));
        assert_eq!(record.final_bill, Decimal::from(4200));
        assert_eq!(record.notified_subscribers, 1);
        assert_eq!(record.steps, AdmissionStep::ORDER.to_vec());
        assert_eq!(*received.borrow(), vec!["Patient John admitted successfully.".to_string()]);

        let receipt = String::from_utf8(out).unwrap();
        assert!(receipt.contains("John"));
        assert!(receipt.contains("4200.00"));
    }

    #[test]
    fn test_notification_payload_fields() {
        let payload = Rc::new(RefCell::new(serde_json::Value::Null));
        let sink = Rc::clone(&payload);
        let mut bus = EventBus::new();
        bus.subscribe(move |event: &Event| {
            *sink.borrow_mut() = event.data.clone();
            Ok(())
        });
        let workflow = AdmissionWorkflow::new(bus);

        workflow
            .admit_patient(Patient::in_patient(1, "John", 3), BillingStrategy::Insurance, &mut Vec::<u8>::new())
            .unwrap();

        let data = payload.borrow();
        let mut keys: Vec<&str> = data.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["final_bill", "patient_id", "patient_type", "strategy"]);
        assert_eq!(data["patient_id"], 1);
        assert_eq!(data["patient_type"], "InPatient");
        let final_bill: Decimal = data["final_bill"].as_str().unwrap().parse().unwrap();
        assert_eq!(final_bill, Decimal::from(4200));
        assert!(!data.to_string().contains("John"));
    }

    #[test]
    fn test_admission_without_subscribers_still_bills() {
        let workflow = AdmissionWorkflow::new(EventBus::new());
        let mut out = Vec::<u8>::new();

        let record = workflow
            .admit_patient(Patient::emergency(3, "Mark"), BillingStrategy::Emergency, &mut out)
            .unwrap();

        assert_eq!(record.final_bill, Decimal::from(6000));
        assert_eq!(record.notified_subscribers, 0);
        assert_eq!(workflow.notifications().subscriber_count(), 0);
        assert!(!out.is_empty());
    }

    #[test]
    fn test_notification_published_after_receipt() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&order);
        let mut bus = EventBus::new();
        bus.subscribe(move |_: &Event| {
            seen.borrow_mut().push("notification");
            Ok(())
        });
        let workflow = AdmissionWorkflow::new(bus);

        struct Recorder(Rc<RefCell<Vec<&'static str>>>);
        impl Write for Recorder {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                let mut order = self.0.borrow_mut();
                if order.last() != Some(&"receipt") {
                    order.push("receipt");
                }
                Ok(buf.len())
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        workflow
            .admit_patient(
                Patient::out_patient(2, "Alice"),
                BillingStrategy::Regular,
                &mut Recorder(Rc::clone(&order)),
            )
            .unwrap();

        assert_eq!(*order.borrow(), vec!["receipt", "notification"]);
    }

    #[test]
    fn test_handler_failure_propagates() {
        let mut bus = EventBus::new();
        bus.subscribe(|_: &Event| Err(EventBusError::HandlerError("down".into())));
        let workflow = AdmissionWorkflow::new(bus);

        let result = workflow.admit_patient(
            Patient::out_patient(2, "Alice"),
            BillingStrategy::Regular,
            &mut Vec::<u8>::new(),
        );

        assert!(matches!(result, Err(crate::WorkflowError::Notification(_))));
    }

    #[test]
    fn test_receipt_write_failure_skips_notification() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let (bus, received) = capturing_bus();
        let workflow = AdmissionWorkflow::new(bus);

        let result = workflow.admit_patient(Patient::emergency(3, "Mark"), BillingStrategy::Emergency, &mut Broken);

        assert!(matches!(result, Err(crate::WorkflowError::Billing(_))));
        assert!(received.borrow().is_empty());
    }
}
