use url::Url;

/// Relative path of the root resource under test.
pub const ROOT_ENDPOINT: &str = "/";

/// Exact body the sample application serves from its root endpoint.
pub const ROOT_EXPECTED_OUTPUT: &str = "Hello World!";

/// Status sentinel returned by the fetch helper when the HTTP exchange
/// completed. This is the helper's own convention, not an HTTP status code:
/// zero means success, anything else means the helper could not complete
/// the exchange.
pub const SUCCESS: i32 = 0;

/// Status sentinel returned by the fetch helper when the exchange failed.
pub const FAILURE: i32 = 1;

/// Joins `base` with a relative `path`.
///
/// Standard URL-join semantics: the relative path replaces the base's path
/// component, scheme and host are preserved.
pub fn join_url(base: &str, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(base)?.join(path)
}
