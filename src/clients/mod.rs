pub mod llm_client;
pub mod search_client;

pub use llm_client::{GenerationRequest, LlmClient, TextGenerator};
pub use search_client::{SearchClient, TopicSearch};
