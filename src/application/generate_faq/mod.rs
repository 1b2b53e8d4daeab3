pub mod parser;
pub mod prompt;
pub mod use_case;
