// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type AuthRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client limiter for the credential endpoints: a burst of 20, refilled
/// at one request per 3 seconds. `None` if the quota is rejected.
pub fn auth_rate_limit_layer() -> Option<AuthRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(3);
    builder.burst_size(20);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
    Some(GovernorLayer::new(config))
}
