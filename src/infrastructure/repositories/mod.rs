pub mod sqlx_city_repository;
pub mod sqlx_faq_repository;
