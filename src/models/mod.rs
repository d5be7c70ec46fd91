//! Request and Response models for the cache server API
//!
//! DTOs used to serialize/deserialize HTTP request and response bodies.

pub mod requests;
pub mod responses;

pub use requests::SetRequest;
pub use responses::{
    ClearResponse, DeleteResponse, ErrorResponse, GetResponse, HealthResponse, InvalidateResponse,
    SetResponse, StatsResponse,
};
