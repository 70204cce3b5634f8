//! Language model providers.

pub mod gemini;

pub use gemini::{GeminiLlmGateway, GeminiSettings};
