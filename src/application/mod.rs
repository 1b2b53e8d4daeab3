pub mod errors;
pub mod generate_faq;
pub mod manage_faqs;
pub mod seed_city_faqs;
