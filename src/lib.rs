//! Receipt Processor Library
//!
//! Accepts purchase receipts over HTTP, scores them with a fixed set of point
//! rules, and serves the stored scores back by identifier.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error types and their HTTP mapping.
//! - `handlers`: HTTP request handlers and router construction.
//! - `models`: Request and response models.
//! - `scoring`: Points calculation rules.
//! - `services`: Receipt processing workflow.
//! - `store`: Score storage.
//! - `validator`: Receipt field validation.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod services;
pub mod store;
pub mod validator;
