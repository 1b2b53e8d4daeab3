pub mod openai_chat_provider;
pub mod traits;
