//! Lead capture: field state, validation and delivery to the webhooks.

pub mod contact;
pub mod diagnostic;
pub mod transport;
pub mod validation;
