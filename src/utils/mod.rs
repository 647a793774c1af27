//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Long URL validation
//! - [`request_origin`] - Scheme and host extraction from HTTP requests

pub mod code_generator;
pub mod request_origin;
pub mod url_validator;
