//! JSON API layer for HTTP request/response handling.
//!
//! Translates the login/logout HTTP requests into application operations
//! and formats responses according to the API contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers

pub mod dto;
pub mod handlers;
