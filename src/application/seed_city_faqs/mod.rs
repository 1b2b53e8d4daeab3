pub mod use_case;
