pub mod cli;
pub mod config;
pub mod container;
pub mod crypto;
pub mod errors;
pub mod exchange;
pub mod stack;
pub mod transport;
