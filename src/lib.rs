pub mod config;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod mail;
pub mod security;
pub mod session;
pub mod templates_structs;
pub mod ui;
