pub mod cli;
pub mod skin_service;
