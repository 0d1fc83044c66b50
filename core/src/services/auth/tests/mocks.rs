//! Mock implementations for testing the identity verification engine

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::services::auth::traits::MailServiceTrait;

/// A captured outbound message
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail transport double that records every message
pub struct MockMailService {
    deliver: AtomicBool,
    pub sent: Mutex<Vec<SentMail>>,
}

impl MockMailService {
    /// A transport that accepts everything
    pub fn new() -> Self {
        Self {
            deliver: AtomicBool::new(true),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// A transport that refuses everything
    pub fn failing() -> Self {
        Self {
            deliver: AtomicBool::new(false),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Body of the most recently sent message
    pub fn last_body(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|m| m.body.clone())
    }

    /// Number of messages handed to the transport
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailServiceTrait for MockMailService {
    async fn send(&self, to: &str, subject: &str, body: &str) -> bool {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        self.deliver.load(Ordering::SeqCst)
    }
}
