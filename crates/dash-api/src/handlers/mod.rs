//! HTTP handlers

pub mod admin;
pub mod api;
pub mod consumer;
pub mod health;
pub mod session;
