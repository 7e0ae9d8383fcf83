pub mod bus;
pub mod config;
pub mod domain;
pub mod error;
