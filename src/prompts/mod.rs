pub mod builder;
pub mod templates;

pub use builder::MenuPromptBuilder;
