pub mod error;
pub mod config;
pub mod validation;
pub mod model;
pub mod queries;
pub mod ops;
pub mod db;
pub mod migrate;
pub mod cli;
