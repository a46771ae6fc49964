use std::sync::Arc;
use thiserror::Error;

use crate::llm::{LlmClient, LlmError};
use crate::prompts::MenuPromptBuilder;
use crate::types::MenuRequest;

/// Errors returned by menu generation
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid menu request: {0}")]
    InvalidRequest(String),

    #[error("Menu generation failed: {0}")]
    Completion(#[from] LlmError),
}

/// Turns menu requests into prompts and sends them to the completion service
pub struct MealPlanner {
    /// The completion client, owned by the caller
    llm_client: Arc<dyn LlmClient>,

    /// Prompt builder for the weekly menu
    prompt_builder: MenuPromptBuilder,
}

impl MealPlanner {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self {
            llm_client,
            prompt_builder: MenuPromptBuilder::new(),
        }
    }

    /// Reject requests that cannot produce a sensible plan
    pub fn validate(request: &MenuRequest) -> Result<(), PlannerError> {
        if request.family_size == 0 {
            return Err(PlannerError::InvalidRequest(
                "family size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// The exact prompt that `generate_menu` would send
    pub fn prompt_for(&self, request: &MenuRequest) -> Result<String, PlannerError> {
        Self::validate(request)?;
        Ok(self.prompt_builder.build_menu_prompt(request))
    }

    /// Generate a weekly menu.
    ///
    /// Makes exactly one completion call and returns its text unmodified. An empty
    /// string is a valid answer; any service failure is returned as an error.
    pub async fn generate_menu(&self, request: &MenuRequest) -> Result<String, PlannerError> {
        let prompt = self.prompt_for(request)?;

        log::info!(
            "🍳 Requesting weekly menu for {} people from {}",
            request.family_size,
            self.llm_client.model_name()
        );
        log::debug!("Menu prompt:\n{}", prompt);

        let menu = match self.llm_client.complete(&prompt).await {
            Ok(menu) => menu,
            Err(e) => {
                log::error!("Completion service failed: {}", e);
                return Err(e.into());
            }
        };

        if menu.trim().is_empty() {
            log::warn!("Completion service returned an empty menu");
        } else {
            log::info!("Received menu ({} chars)", menu.len());
        }

        Ok(menu)
    }
}
