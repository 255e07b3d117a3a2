pub mod error;
pub mod validation;
pub mod config;
pub mod logging;
pub mod model;
pub mod db;
pub mod ops;
pub mod http;
pub mod client;
pub mod cli;
