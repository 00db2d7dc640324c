//! Scripted transport for unit tests

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::api::transport::{HttpResponse, Transport, TransportError};

/// One request seen by [`MockTransport`]
#[derive(Debug, Clone)]
pub enum Recorded {
    Post {
        url: String,
        headers: Vec<(String, String)>,
        body: String,
    },
    Get {
        url: String,
    },
}

impl Recorded {
    /// "METHOD resource", e.g. "POST part"
    pub fn summary(&self) -> String {
        let (method, url) = match self {
            Recorded::Post { url, .. } => ("POST", url),
            Recorded::Get { url } => ("GET", url),
        };
        let resource = url.trim_end_matches('/').rsplit('/').next().unwrap_or("");
        format!("{} {}", method, resource)
    }
}

enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

/// Answers requests from a queue of canned responses, recording each call
#[derive(Default)]
pub struct MockTransport {
    script: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<Recorded>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Respond(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: impl Into<String>) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Fail(message.into()));
        self
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.borrow().clone()
    }

    fn next(&self) -> Result<HttpResponse, TransportError> {
        match self.script.borrow_mut().pop_front() {
            Some(Scripted::Respond(response)) => Ok(response),
            Some(Scripted::Fail(message)) => Err(TransportError::Connection(message)),
            None => Err(TransportError::Connection(
                "no scripted response left".to_string(),
            )),
        }
    }
}

impl Transport for MockTransport {
    fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: Vec<u8>,
    ) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(Recorded::Post {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: String::from_utf8_lossy(&body).into_owned(),
        });
        self.next()
    }

    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(Recorded::Get {
            url: url.to_string(),
        });
        self.next()
    }
}
