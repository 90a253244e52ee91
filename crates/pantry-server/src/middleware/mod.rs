//! HTTP middleware for the Pantry API server.

pub mod request_id;
