pub mod city;
pub mod faq;
pub mod shared;
