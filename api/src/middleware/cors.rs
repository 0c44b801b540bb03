//! CORS middleware configuration for cross-origin requests.
//!
//! The portfolio front end is served from a different origin than the API,
//! so browsers need CORS headers on every endpoint.

use actix_cors::Cors;
use pa_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// With no `ALLOWED_ORIGINS` configured any origin may call the API;
/// otherwise only the listed origins are accepted. Methods and headers
/// are unrestricted and credentials are not supported.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(config.max_age);

    if config.allows_any_origin() {
        cors = cors.allow_any_origin();
    } else {
        for origin in &config.allowed_origins {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
