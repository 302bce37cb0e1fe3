pub mod catalog;
pub mod chat;
pub mod config;
pub mod inference;
pub mod message;
pub mod request;
pub mod session;
