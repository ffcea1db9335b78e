//! Commercial-diagnosis form of the `/diagnostico` page.
//!
//! Field-level messages come from the browser's `required` constraint. The
//! controller repeats the presence check on trimmed values, so a field holding
//! only spaces is flagged here instead. The webhook expects Portuguese keys.

use chrono::{DateTime, SecondsFormat, Utc};
use log::{info, warn};
use serde::{Serialize, Serializer};

use super::transport::{SubmitError, WebhookRequest};
use super::validation::is_blank;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticField {
    Name,
    Whatsapp,
    Email,
    Company,
    Segment,
    Website,
    Revenue,
}

impl DiagnosticField {
    pub const ALL: [DiagnosticField; 7] = [
        DiagnosticField::Name,
        DiagnosticField::Whatsapp,
        DiagnosticField::Email,
        DiagnosticField::Company,
        DiagnosticField::Segment,
        DiagnosticField::Website,
        DiagnosticField::Revenue,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DiagnosticField::Name => "name",
            DiagnosticField::Whatsapp => "whatsapp",
            DiagnosticField::Email => "email",
            DiagnosticField::Company => "company",
            DiagnosticField::Segment => "segment",
            DiagnosticField::Website => "website",
            DiagnosticField::Revenue => "revenue",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn is_required(self) -> bool {
        !matches!(self, DiagnosticField::Website | DiagnosticField::Revenue)
    }
}

/// Monthly revenue ranges offered by the select box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevenueBracket {
    UpTo50k,
    From50kTo100k,
    From100kTo500k,
    From500kTo1m,
    Above1m,
}

impl RevenueBracket {
    pub const ALL: [RevenueBracket; 5] = [
        RevenueBracket::UpTo50k,
        RevenueBracket::From50kTo100k,
        RevenueBracket::From100kTo500k,
        RevenueBracket::From500kTo1m,
        RevenueBracket::Above1m,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RevenueBracket::UpTo50k => "Até R$ 50 mil",
            RevenueBracket::From50kTo100k => "R$ 50 mil a R$ 100 mil",
            RevenueBracket::From100kTo500k => "R$ 100 mil a R$ 500 mil",
            RevenueBracket::From500kTo1m => "R$ 500 mil a R$ 1 milhão",
            RevenueBracket::Above1m => "Acima de R$ 1 milhão",
        }
    }

    /// Anything that is not one of the labels (including `""`) is no selection.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bracket| bracket.label() == label)
    }
}

fn serialize_revenue<S: Serializer>(
    revenue: &Option<RevenueBracket>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(revenue.map(RevenueBracket::label).unwrap_or(""))
}

pub const SEGMENTS: [&str; 8] = [
    "Varejo",
    "Serviços",
    "Saúde",
    "Educação",
    "Imobiliário",
    "Indústria",
    "Tecnologia",
    "Outro",
];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagnosticLead {
    pub name: String,
    pub whatsapp: String,
    pub email: String,
    pub company: String,
    pub segment: String,
    pub website: String,
    pub revenue: Option<RevenueBracket>,
}

impl DiagnosticLead {
    /// Current value as shown in the input; revenue renders as its label.
    pub fn get(&self, field: DiagnosticField) -> &str {
        match field {
            DiagnosticField::Name => &self.name,
            DiagnosticField::Whatsapp => &self.whatsapp,
            DiagnosticField::Email => &self.email,
            DiagnosticField::Company => &self.company,
            DiagnosticField::Segment => &self.segment,
            DiagnosticField::Website => &self.website,
            DiagnosticField::Revenue => self.revenue.map(RevenueBracket::label).unwrap_or(""),
        }
    }

    pub fn set(&mut self, field: DiagnosticField, value: String) {
        match field {
            DiagnosticField::Name => self.name = value,
            DiagnosticField::Whatsapp => self.whatsapp = value,
            DiagnosticField::Email => self.email = value,
            DiagnosticField::Company => self.company = value,
            DiagnosticField::Segment => self.segment = value,
            DiagnosticField::Website => self.website = value,
            DiagnosticField::Revenue => self.revenue = RevenueBracket::from_label(&value),
        }
    }

    pub fn missing_required(&self) -> Vec<DiagnosticField> {
        DiagnosticField::ALL
            .into_iter()
            .filter(|field| field.is_required() && is_blank(self.get(*field)))
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct DiagnosticPayload<'a> {
    pub nome: &'a str,
    pub whatsapp: &'a str,
    pub email: &'a str,
    pub empresa: &'a str,
    pub segmento: &'a str,
    pub website: &'a str,
    #[serde(serialize_with = "serialize_revenue")]
    pub faturamento: Option<RevenueBracket>,
    pub timestamp: String,
    pub origem: &'static str,
}

impl<'a> DiagnosticPayload<'a> {
    pub fn new(lead: &'a DiagnosticLead, now: DateTime<Utc>) -> Self {
        Self {
            nome: &lead.name,
            whatsapp: &lead.whatsapp,
            email: &lead.email,
            empresa: &lead.company,
            segmento: &lead.segment,
            website: &lead.website,
            faturamento: lead.revenue,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            origem: config::DIAGNOSTIC_SOURCE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiagnosticFormState {
    lead: DiagnosticLead,
    missing: Vec<DiagnosticField>,
    submitted: bool,
    failed: bool,
    is_submitting: bool,
}

impl DiagnosticFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lead(&self) -> &DiagnosticLead {
        &self.lead
    }

    pub fn value(&self, field: DiagnosticField) -> &str {
        self.lead.get(field)
    }

    /// Terminal: once true the page swaps the form for a thank-you view.
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Required fields that were blank at the last submit attempt.
    pub fn is_missing(&self, field: DiagnosticField) -> bool {
        self.missing.contains(&field)
    }

    pub fn update_field(&mut self, field: DiagnosticField, value: String) {
        self.lead.set(field, value);
        self.missing.retain(|missing| *missing != field);
    }

    pub fn dismiss_failure(&mut self) {
        self.failed = false;
    }

    pub fn begin_submit(&mut self, now: DateTime<Utc>) -> Option<WebhookRequest> {
        self.missing = self.lead.missing_required();
        if !self.missing.is_empty() {
            info!("Diagnostic form missing {:?}", self.missing);
            return None;
        }

        self.is_submitting = true;
        self.failed = false;

        let payload = DiagnosticPayload::new(&self.lead, now);
        match WebhookRequest::json(config::DIAGNOSTIC_WEBHOOK_URL, false, &payload) {
            Ok(request) => Some(request),
            Err(e) => {
                self.finish_submit(Err(e));
                None
            }
        }
    }

    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) {
        match outcome {
            Ok(()) => {
                info!("Diagnostic lead delivered");
                self.submitted = true;
            }
            Err(e) => {
                warn!("Diagnostic lead submission failed: {}", e);
                self.failed = true;
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
        Utc.with_ymd_and_hms(2024, 11, 2, 9, 0, 0).unwrap()
    }

    /// Same steps `DiagnosticForm::update` takes for `Submit` and `Submitted`.
    fn submit(form: &mut DiagnosticFormState, transport: &RecordingTransport) -> bool {
        let Some(request) = form.begin_submit(now()) else {
            return false;
        };
        form.finish_submit(block_on(transport.send(request)));
        true
    }

    fn filled() -> DiagnosticFormState {
        let mut form = DiagnosticFormState::new();
        form.update_field(DiagnosticField::Name, "Bruno".into());
        form.update_field(DiagnosticField::Whatsapp, "(21) 98888-7777".into());
        form.update_field(DiagnosticField::Email, "bruno@loja.com.br".into());
        form.update_field(DiagnosticField::Company, "Loja Azul".into());
        form.update_field(DiagnosticField::Segment, "Varejo".into());
        form
    }

    #[test]
    fn optional_fields_are_not_required() {
        let form = filled();
        assert!(form.lead.missing_required().is_empty());
        assert_eq!(form.value(DiagnosticField::Website), "");
        assert_eq!(form.value(DiagnosticField::Revenue), "");
    }

    #[test]
    fn blank_required_field_blocks_request() {
        let mut form = filled();
        form.update_field(DiagnosticField::Company, "  ".into());
        let transport = RecordingTransport::answering(200);

        assert!(!submit(&mut form, &transport));
        assert_eq!(transport.sent_count(), 0);
        assert!(form.is_missing(DiagnosticField::Company));
        assert!(!form.is_missing(DiagnosticField::Name));
        assert!(!form.submitted());
        assert!(!form.is_submitting());
    }

    #[test]
    fn typing_into_flagged_field_clears_the_flag() {
        let mut form = filled();
        form.update_field(DiagnosticField::Name, " ".into());
        form.update_field(DiagnosticField::Segment, "".into());
        assert!(form.begin_submit(now()).is_none());
        assert!(form.is_missing(DiagnosticField::Name));
        assert!(form.is_missing(DiagnosticField::Segment));

        form.update_field(DiagnosticField::Name, "Bruno".into());
        assert!(!form.is_missing(DiagnosticField::Name));
        assert!(form.is_missing(DiagnosticField::Segment));

        form.update_field(DiagnosticField::Segment, "Saúde".into());
        assert!(form.begin_submit(now()).is_some());
        assert!(!form.is_missing(DiagnosticField::Segment));
    }

    #[test]
    fn revenue_only_accepts_known_labels() {
        let mut form = filled();
        form.update_field(DiagnosticField::Revenue, "R$ 100 mil a R$ 500 mil".into());
        assert_eq!(form.lead().revenue, Some(RevenueBracket::From100kTo500k));

        form.update_field(DiagnosticField::Revenue, "muito".into());
        assert_eq!(form.lead().revenue, None);
    }

    #[test]
    fn success_is_terminal_and_keeps_nothing_pending() {
        let mut form = filled();
        let transport = RecordingTransport::answering(200);

        assert!(submit(&mut form, &transport));

        assert!(form.submitted());
        assert!(!form.failed());
        assert!(!form.is_submitting());
        assert!(!transport.sent.borrow()[0].accept_json);
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut form = filled();
        let before = form.lead().clone();

        submit(&mut form, &RecordingTransport::offline());

        assert!(form.failed());
        assert!(!form.submitted());
        assert!(!form.is_submitting());
        assert_eq!(form.lead(), &before);

        form.dismiss_failure();
        assert!(!form.failed());
    }

    #[test]
    fn payload_uses_portuguese_wire_keys() {
        let mut form = filled();
        form.update_field(DiagnosticField::Website, "https://lojaazul.com.br".into());
        form.update_field(DiagnosticField::Revenue, "Acima de R$ 1 milhão".into());
        let transport = RecordingTransport::answering(204);
        submit(&mut form, &transport);

        let body = transport.last_body();
        let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "email",
                "empresa",
                "faturamento",
                "nome",
                "origem",
                "segmento",
                "timestamp",
                "website",
                "whatsapp"
            ]
        );
        assert_eq!(body["nome"], "Bruno");
        assert_eq!(body["empresa"], "Loja Azul");
        assert_eq!(body["segmento"], "Varejo");
        assert_eq!(body["faturamento"], "Acima de R$ 1 milhão");
        assert_eq!(body["origem"], config::DIAGNOSTIC_SOURCE);
        assert_eq!(body["timestamp"], "2024-11-02T09:00:00.000Z");
    }

    #[test]
    fn unselected_revenue_is_sent_empty() {
        let mut form = filled();
        let transport = RecordingTransport::answering(200);
        submit(&mut form, &transport);
        assert_eq!(transport.last_body()["faturamento"], "");
    }
}
