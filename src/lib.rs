pub mod catalog;
pub mod config;
pub mod copywriter;
pub mod error;
pub mod filters;
pub mod lead;
pub mod messaging;
pub mod models;
pub mod session;
pub mod tiering;
pub mod valuation;
