//! API Module
//!
//! HTTP handlers and routing for the weather backend REST API.
//!
//! # Endpoints
//! - `POST /api/weather` - Current weather for a city (cache-mediated)
//! - `GET /api/weather/:city` - Cached weather only
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/cache/stats` - Cache statistics
//! - `GET /api/test/cities` - Mock city list (test mode only)

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;
