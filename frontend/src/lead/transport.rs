use gloo_net::http::Request;
use log::{debug, error};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("failed to encode lead: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Network(String),
    #[error("webhook answered with status {0}")]
    Status(u16),
}

/// One outbound POST to a lead webhook. The body is already JSON-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookRequest {
    pub url: &'static str,
    pub accept_json: bool,
    pub body: String,
}

impl WebhookRequest {
    pub fn json<T: Serialize>(
        url: &'static str,
        accept_json: bool,
        payload: &T,
    ) -> Result<Self, SubmitError> {
        Ok(Self {
            url,
            accept_json,
            body: serde_json::to_string(payload)?,
        })
    }
}

/// Sends a webhook request. Any 2xx is `Ok`; every other outcome is a
/// `SubmitError` and the form treats them all the same way.
#[allow(async_fn_in_trait)]
pub trait LeadTransport {
    async fn send(&self, request: WebhookRequest) -> Result<(), SubmitError>;
}

/// Browser `fetch` through gloo-net.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WebhookTransport;

impl LeadTransport for WebhookTransport {
    async fn send(&self, request: WebhookRequest) -> Result<(), SubmitError> {
        let mut builder = Request::post(request.url).header("Content-Type", "application/json");
        if request.accept_json {
            builder = builder.header("Accept", "application/json");
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| {
                error!("Lead webhook unreachable: {}", e);
                SubmitError::Network(e.to_string())
            })?;

        if response.ok() {
            debug!("Lead webhook accepted submission ({})", response.status());
            Ok(())
        } else {
            error!("Lead webhook rejected submission with status {}", response.status());
            Err(SubmitError::Status(response.status()))
        }
    }
}

#[cfg(test)]
pub(crate) mod stub {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Records every request and answers with a fixed outcome.
    #[derive(Default)]
    pub struct RecordingTransport {
        pub sent: RefCell<Vec<WebhookRequest>>,
        status: Cell<u16>,
        offline: Cell<bool>,
    }

    impl RecordingTransport {
        pub fn answering(status: u16) -> Self {
            let transport = Self::default();
            transport.status.set(status);
            transport
        }

        pub fn offline() -> Self {
            let transport = Self::default();
            transport.offline.set(true);
            transport
        }

        pub fn sent_count(&self) -> usize {
            self.sent.borrow().len()
        }

        pub fn last_body(&self) -> serde_json::Value {
            let sent = self.sent.borrow();
            let last = sent.last().expect("a request was sent");
            serde_json::from_str(&last.body).expect("body is json")
        }
    }

    impl LeadTransport for RecordingTransport {
        async fn send(&self, request: WebhookRequest) -> Result<(), SubmitError> {
            self.sent.borrow_mut().push(request);
            if self.offline.get() {
                return Err(SubmitError::Network("offline".to_string()));
            }
            match self.status.get() {
                200..=299 => Ok(()),
                status => Err(SubmitError::Status(status)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_request_carries_encoded_body() {
        let request = WebhookRequest::json("https://hooks.test/lead", true, &json!({"a": 1})).unwrap();
        assert_eq!(request.url, "https://hooks.test/lead");
        assert!(request.accept_json);
        assert_eq!(request.body, r#"{"a":1}"#);
    }

    #[test]
    fn errors_read_as_one_line() {
        assert_eq!(SubmitError::Status(500).to_string(), "webhook answered with status 500");
        assert_eq!(
            SubmitError::Network("offline".into()).to_string(),
            "request failed: offline"
        );
    }
}
