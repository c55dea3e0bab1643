//! Stub collaborators shared by the handler and router tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::config::Config;
use crate::llm::{LlmError, MovieOracle};
use crate::reviews::ReviewSource;
use crate::search::ReviewMetadata;
use crate::server::AppState;

pub struct StubOracle {
    reply: Option<String>,
    calls: AtomicUsize,
    last_message: Mutex<Option<String>>,
}

impl StubOracle {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            last_message: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_message: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_message(&self) -> Option<String> {
        self.last_message.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieOracle for StubOracle {
    async fn complete(&self, _system: &str, user: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_message.lock().unwrap() = Some(user.to_string());
        self.reply
            .clone()
            .ok_or_else(|| LlmError::Status(502, "bad gateway".to_string()))
    }
}

/// Answers from a fixed title map and records every title it was asked for.
pub struct StubReviews {
    known: HashMap<String, ReviewMetadata>,
    calls: Mutex<Vec<String>>,
}

impl StubReviews {
    pub fn empty() -> Self {
        Self::with(&[])
    }

    pub fn with(entries: &[(&str, ReviewMetadata)]) -> Self {
        Self {
            known: entries
                .iter()
                .map(|(title, meta)| (title.to_string(), meta.clone()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewSource for StubReviews {
    async fn lookup(&self, title: &str) -> Option<ReviewMetadata> {
        self.calls.lock().unwrap().push(title.to_string());
        self.known.get(title).cloned()
    }
}

pub fn test_state(oracle: Arc<dyn MovieOracle>, reviews: Arc<dyn ReviewSource>) -> AppState {
    AppState::new(Config::default(), oracle, reviews)
}
