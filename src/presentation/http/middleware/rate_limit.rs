// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Replenish one request every 200ms per client address.
const REPLENISH_INTERVAL_MS: u64 = 200;
const BURST_SIZE: u32 = 60;

/// Per-IP limiter for the public read endpoints. Returns `None` when the
/// quota cannot be built, in which case the routes are served unthrottled.
pub fn public_rate_limit_layer() -> Option<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>>
{
    let mut builder = GovernorConfigBuilder::default();
    builder.per_millisecond(REPLENISH_INTERVAL_MS);
    builder.burst_size(BURST_SIZE);
    let config = builder.key_extractor(SmartIpKeyExtractor).finish()?;
    Some(GovernorLayer::new(config))
}
