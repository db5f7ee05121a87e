//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Extract the matched route pattern for metrics labels.
///
/// Falls back to the raw path when no pattern matched, so proxy
/// traffic under the wildcard route is grouped by pattern instead of
/// producing one label per backend path.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| req.path().to_string())
}
