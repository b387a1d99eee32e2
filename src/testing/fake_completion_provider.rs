use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::CompletionProvider;

/// Completion provider returning a canned answer and recording every prompt.
#[derive(Clone)]
pub struct FakeCompletionProvider {
    pub prompts: Arc<Mutex<Vec<String>>>,
    response: Result<String, String>,
}

impl FakeCompletionProvider {
    pub fn new(response: impl Into<String>) -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), response: Ok(response.into()) }
    }

    /// A provider whose every call fails with a `CompletionApi` error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { prompts: Arc::new(Mutex::new(vec![])), response: Err(message.into()) }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionProvider for FakeCompletionProvider {
    fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response
            .clone()
            .map_err(|message| AppError::CompletionApi { message, status: Some(500) })
    }
}
