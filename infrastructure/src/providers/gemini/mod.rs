//! Google Gemini provider.
//!
//! | File | Contents |
//! |------|----------|
//! | `adapter.rs` | [`GeminiLlmGateway`], the [`LlmGateway`](liveqa_application::LlmGateway) adapter |
//! | `types.rs` | `generateContent` request/response types and error mapping |

mod adapter;
pub mod types;

pub use adapter::{GeminiLlmGateway, GeminiSettings};
