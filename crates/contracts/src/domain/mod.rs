pub mod common;
pub mod integrations;
