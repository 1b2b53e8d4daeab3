pub mod database;
pub mod llm;
pub mod repositories;
