//! # Family Helper
//!
//! Weekly meal planning for a household, driven by a hosted language model.
//!
//! ## Features
//!
//! - **Preference Store**: Saves one household profile to a local JSON file
//! - **Menu Prompt Builder**: Shapes the profile and session notes into a single prompt
//! - **Meal Planner**: Sends the prompt to an injected completion client and returns the text as-is
//! - **Family Form**: Explicit form submission that becomes a profile
//! - **Studio Directory**: Placeholder photo studio listings
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use family_helper::{FileProfileStore, MealPlanner, MenuRequest, ProfileStore, llm::FakeClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = FileProfileStore::new("family_preferences.json");
//! let planner = MealPlanner::new(Arc::new(FakeClient::with_sample_menu()));
//!
//! let request = match store.load()? {
//!     Some(profile) => MenuRequest::from_profile(&profile, "half a bag of rice"),
//!     None => MenuRequest::new(4),
//! };
//! let menu = planner.generate_menu(&request).await?;
//! println!("{}", menu);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod engine;
pub mod form;
pub mod llm;
pub mod prompts;
pub mod store;
pub mod studios;
pub mod traits;
pub mod types;

// Re-export main types for convenience
pub use config::{Config, LlmConfig, StorageConfig};
pub use engine::{MealPlanner, PlannerError};
pub use form::{FamilyForm, FormError, KidEntry, MemberEntry};
pub use llm::{LlmClient, LlmError};
pub use prompts::MenuPromptBuilder;
pub use store::{FileProfileStore, StoreError};
pub use studios::{StaticStudioDirectory, StudioError, StudioListing, StudioQuery};
pub use traits::{ProfileStore, StudioDirectory};
pub use types::{FamilyMember, HouseholdProfile, MemberRole, MenuRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
