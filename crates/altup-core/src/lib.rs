pub mod config;
pub mod logging;

// Engine modules
pub mod ascend;
pub mod command;
pub mod url_model;
