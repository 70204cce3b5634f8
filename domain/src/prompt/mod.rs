//! Prompt templates

mod template;

pub use template::ReactPromptTemplate;
