pub mod clients;
pub mod domain;
pub mod infra;
