use log::Level;

pub const CONTACT_WEBHOOK_URL: &str =
    "https://manuela.noctai.com.br/webhook-test/32577b32-30d4-4f63-b080-288973ec4810";
pub const CONTACT_SOURCE: &str = "NOCTA.I SALES AI Landing Page";
pub const CONTACT_LEAD_TYPE: &str = "contact_form";

pub const DIAGNOSTIC_WEBHOOK_URL: &str =
    "https://manuela.noctai.com.br/webhook/diagnostico-comercial";
pub const DIAGNOSTIC_SOURCE: &str = "NOCTA.I SALES AI Diagnóstico Comercial";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
