//! API Module
//!
//! HTTP handlers and routing that expose one shared cache to collaborators.
//!
//! # Endpoints
//! - `PUT /set` - Store a value with optional TTL and tags
//! - `GET /get/:key` - Retrieve a value by key
//! - `DELETE /del/:key` - Delete a key
//! - `DELETE /clear` - Remove every entry
//! - `POST /invalidate/:tag` - Invalidate every entry carrying a tag
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
