//! Demo-request form of the main landing page.
//!
//! The controller owns the field values, the inline validation errors and the
//! submission status. It never touches the DOM; the `ContactForm` component
//! feeds it input events and drives the webhook call.

use std::collections::HashMap;

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::Serialize;

use super::transport::{SubmitError, WebhookRequest};
use super::validation::{is_blank, is_valid_email, is_valid_phone};
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Message,
    ];

    /// The `name`/`id` attribute used by the input element.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Company => "company",
            ContactField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactLead {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        }
    }

    /// Field-by-field rules. Message is optional and never checked.
    pub fn check(&self) -> HashMap<ContactField, &'static str> {
        let mut errors = HashMap::new();

        if is_blank(&self.name) {
            errors.insert(ContactField::Name, "Nome é obrigatório");
        }

        if is_blank(&self.email) {
            errors.insert(ContactField::Email, "Email é obrigatório");
        } else if !is_valid_email(&self.email) {
            errors.insert(ContactField::Email, "Email inválido");
        }

        if is_blank(&self.phone) {
            errors.insert(ContactField::Phone, "Telefone é obrigatório");
        } else if !is_valid_phone(&self.phone) {
            errors.insert(ContactField::Phone, "Telefone inválido");
        }

        if is_blank(&self.company) {
            errors.insert(ContactField::Company, "Empresa é obrigatória");
        }

        errors
    }
}

/// Body posted to the contact webhook.
#[derive(Debug, Serialize)]
pub struct ContactPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company: &'a str,
    pub message: &'a str,
    pub source: &'static str,
    pub timestamp: String,
    pub lead_type: &'static str,
}

impl<'a> ContactPayload<'a> {
    pub fn new(lead: &'a ContactLead, now: DateTime<Utc>) -> Self {
        Self {
            name: &lead.name,
            email: &lead.email,
            phone: &lead.phone,
            company: &lead.company,
            message: &lead.message,
            source: config::CONTACT_SOURCE,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            lead_type: config::CONTACT_LEAD_TYPE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    lead: ContactLead,
    errors: HashMap<ContactField, &'static str>,
    status: SubmissionStatus,
    is_submitting: bool,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        self.lead.get(field)
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Overwrites one field and drops any error shown for it.
    pub fn update_field(&mut self, field: ContactField, value: String) {
        *self.lead.slot(field) = value;
        self.errors.remove(&field);
    }

    pub fn validate(&mut self) -> bool {
        self.errors = self.lead.check();
        self.errors.is_empty()
    }

    /// Validates and, when the lead passes, enters the loading state and
    /// returns the request to send. A request already in flight does not
    /// block a new one.
    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<WebhookRequest> {
        if !self.validate() {
            info!("Contact form blocked by {} invalid field(s)", self.errors.len());
            return None;
        }

        self.is_submitting = true;
        self.status = SubmissionStatus::Idle;

        let payload = ContactPayload::new(&self.lead, now);
        match WebhookRequest::json(config::CONTACT_WEBHOOK_URL, true, &payload) {
            Ok(request) => Some(request),
            Err(e) => {
                self.finish_submit(Err(e));
                None
            }
        }
    }

    /// Applies the webhook outcome. The loading flag is cleared on every path.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                info!("Contact lead delivered");
                self.status = SubmissionStatus::Success;
                self.lead = ContactLead::default();
            }
            Err(e) => {
                warn!("Contact lead submission failed: {}", e);
                self.status = SubmissionStatus::Error;
            }
        }
        self.is_submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lead::transport::stub::RecordingTransport;
    use crate::lead::transport::LeadTransport;
    use chrono::TimeZone;
    use futures::executor::block_on;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 17, 13, 45, 7).unwrap()
    }

    /// Same steps `ContactForm::update` takes for `Submit` and `Submitted`.
    fn submit(form: &mut ContactFormState, transport: &RecordingTransport) -> bool {
        let Some(request) = form.begin_submit(now()) else {
            return false;
        };
        form.finish_submit(block_on(transport.send(request)));
        true
    }

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::new();
        form.update_field(ContactField::Name, "Ana".into());
        form.update_field(ContactField::Email, "ana@x.com".into());
        form.update_field(ContactField::Phone, "11999999999".into());
        form.update_field(ContactField::Company, "Acme".into());
        form
    }

    #[test]
    fn field_names_round_trip_through_dom_attributes() {
        for field in ContactField::ALL {
            assert_eq!(ContactField::from_name(field.name()), Some(field));
        }
        assert_eq!(ContactField::from_name("whatsapp"), None);
    }

    #[test]
    fn each_empty_required_field_gets_exactly_one_error() {
        let required = [
            (ContactField::Name, "Nome é obrigatório"),
            (ContactField::Email, "Email é obrigatório"),
            (ContactField::Phone, "Telefone é obrigatório"),
            (ContactField::Company, "Empresa é obrigatória"),
        ];
        for (field, message) in required {
            let mut form = filled();
            form.update_field(field, "   ".into());
            let transport = RecordingTransport::answering(200);

            assert!(!submit(&mut form, &transport));
            assert_eq!(transport.sent_count(), 0);
            assert_eq!(form.errors.len(), 1, "only {:?} should fail", field);
            assert_eq!(form.error(field), Some(message));
        }
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = ContactFormState::new();
        assert!(!form.validate());
        assert_eq!(form.errors.len(), 4);
        assert_eq!(form.error(ContactField::Message), None);
    }

    #[test]
    fn email_rule() {
        let mut form = filled();
        form.update_field(ContactField::Email, "not-an-email".into());
        assert!(!form.validate());
        assert_eq!(form.error(ContactField::Email), Some("Email inválido"));

        form.update_field(ContactField::Email, "user@example.com".into());
        assert!(form.validate());
    }

    #[test]
    fn phone_rule() {
        let mut form = filled();
        form.update_field(ContactField::Phone, "abc".into());
        assert!(!form.validate());
        assert_eq!(form.error(ContactField::Phone), Some("Telefone inválido"));

        form.update_field(ContactField::Phone, "(11) 99999-9999".into());
        assert!(form.validate());
    }

    #[test]
    fn typing_clears_only_that_fields_error() {
        let mut form = ContactFormState::new();
        form.validate();
        form.update_field(ContactField::Name, "A".into());
        assert_eq!(form.error(ContactField::Name), None);
        assert_eq!(form.error(ContactField::Company), Some("Empresa é obrigatória"));
    }

    #[test]
    fn successful_submission_resets_fields() {
        let mut form = filled();
        form.update_field(ContactField::Message, "Quero uma demo".into());
        let transport = RecordingTransport::answering(200);

        assert!(submit(&mut form, &transport));

        assert_eq!(transport.sent_count(), 1);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(!form.is_submitting());
        assert_eq!(&form.lead, &ContactLead::default());
    }

    #[test]
    fn server_error_keeps_fields() {
        let mut form = filled();
        let before = form.lead.clone();
        let transport = RecordingTransport::answering(500);

        assert!(submit(&mut form, &transport));

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert!(!form.is_submitting());
        assert_eq!(&form.lead, &before);
    }

    #[test]
    fn network_error_keeps_fields() {
        let mut form = filled();
        let before = form.lead.clone();
        let transport = RecordingTransport::offline();

        submit(&mut form, &transport);

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert!(!form.is_submitting());
        assert_eq!(&form.lead, &before);
    }

    #[test]
    fn retry_after_failure_can_succeed() {
        let mut form = filled();
        submit(&mut form, &RecordingTransport::answering(503));
        assert_eq!(form.status(), SubmissionStatus::Error);

        submit(&mut form, &RecordingTransport::answering(201));
        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn begin_submit_enters_loading_and_resets_status() {
        let mut form = filled();
        form.finish_submit(Err(SubmitError::Status(500)));
        assert_eq!(form.status(), SubmissionStatus::Error);

        let request = form.begin_submit(now()).expect("valid lead");
        assert!(form.is_submitting());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(request.accept_json);
        assert_eq!(request.url, config::CONTACT_WEBHOOK_URL);
    }

    #[test]
    fn rapid_double_submit_sends_two_requests() {
        let mut form = filled();
        let first = form.begin_submit(now()).expect("first");
        let second = form.begin_submit(now()).expect("second while loading");
        let transport = RecordingTransport::answering(200);

        let (a, b) = block_on(async {
            futures::join!(transport.send(first), transport.send(second))
        });

        assert!(a.is_ok() && b.is_ok());
        assert_eq!(transport.sent_count(), 2);
    }

    #[test]
    fn payload_uses_contact_wire_keys() {
        let mut form = filled();
        form.update_field(ContactField::Message, "Olá".into());
        let transport = RecordingTransport::answering(200);
        submit(&mut form, &transport);

        let body = transport.last_body();
        let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["company", "email", "lead_type", "message", "name", "phone", "source", "timestamp"]
        );
        assert_eq!(body["name"], "Ana");
        assert_eq!(body["message"], "Olá");
        assert_eq!(body["source"], "NOCTA.I SALES AI Landing Page");
        assert_eq!(body["lead_type"], "contact_form");
        assert_eq!(body["timestamp"], "2024-05-17T13:45:07.000Z");
    }

    #[test]
    fn invalid_email_blocks_request_and_flags_only_email() {
        let mut form = filled();
        form.update_field(ContactField::Email, "bad".into());
        let transport = RecordingTransport::answering(200);

        assert!(!submit(&mut form, &transport));

        assert_eq!(transport.sent_count(), 0);
        assert_eq!(form.errors.len(), 1);
        assert_eq!(form.error(ContactField::Email), Some("Email inválido"));
    }
}
