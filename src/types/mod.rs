pub mod config;
pub mod document;
pub mod profile;
pub mod scoring;
