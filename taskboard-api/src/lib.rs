//! # Taskboard API Server Library
//!
//! This library provides the core functionality for the Taskboard API
//! server: a small CRUD surface over users and the tasks they own.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
