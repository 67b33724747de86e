pub mod analyser;
pub mod completion;
pub mod config;
pub mod consts;
pub mod error;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod server;
