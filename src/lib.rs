pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod hints;
pub mod repository;
pub mod service;
