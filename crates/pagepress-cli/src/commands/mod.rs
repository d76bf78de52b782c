pub mod cleanup;
pub mod config;
pub mod publish;
