//! Fake completion client for tests and offline runs.
//!
//! Replays a scripted outcome for every call and records each prompt it was sent,
//! so tests can assert on exactly what the planner asked for.

use async_trait::async_trait;
use std::sync::Mutex;

use super::{LlmClient, LlmError};

const SAMPLE_MENU: &str = "1. MEAL PLAN:\n\
Monday - Breakfast - Veggie Omelette - eggs, spinach, tomato, cheese\n\
Monday - Dinner - Chicken Rice Bowl - chicken, rice, spinach, tomato\n\
\n\
2. SHOPPING LIST:\n\
Produce: spinach (2 bags), tomatoes (6)\n\
Protein: eggs (1 dozen), chicken breast (2 lb)\n\
Pantry: rice (2 lb)\n\
Dairy: cheese (8 oz)\n";

#[derive(Debug, Clone)]
enum Outcome {
    Reply(String),
    Fail { status: u16, message: String },
}

#[derive(Debug)]
pub struct FakeClient {
    outcome: Outcome,
    prompts: Mutex<Vec<String>>,
}

impl FakeClient {
    /// Always answer with `text`
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Reply(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail as if the service returned an error status
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Fail {
                status,
                message: message.into(),
            },
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answer with a short canned menu
    pub fn with_sample_menu() -> Self {
        Self::replying(SAMPLE_MENU)
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.outcome {
            Outcome::Reply(text) => Ok(text.clone()),
            Outcome::Fail { status, message } => Err(LlmError::ApiError {
                status: *status,
                message: message.clone(),
            }),
        }
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replies_and_records() {
        let client = FakeClient::replying("menu");
        assert_eq!(client.complete("first").await.unwrap(), "menu");
        assert_eq!(client.complete("second").await.unwrap(), "menu");
        assert_eq!(client.prompts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_failing() {
        let client = FakeClient::failing(503, "overloaded");
        let err = client.complete("anything").await.unwrap_err();
        assert!(matches!(err, LlmError::ApiError { status: 503, .. }));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_sample_menu_has_both_sections() {
        let text = FakeClient::with_sample_menu().complete("x").await.unwrap();
        assert!(text.contains("MEAL PLAN"));
        assert!(text.contains("SHOPPING LIST"));
    }
}
