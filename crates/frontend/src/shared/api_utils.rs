//! URL helpers for frontend-backend communication.

/// Joins an API base and an endpoint with exactly one slash.
///
/// ```rust,ignore
/// assert_eq!(api_url("/api", "decode"), "/api/decode");
/// ```
pub fn api_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", base, endpoint)
}
