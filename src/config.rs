//! Build-time configuration for the web client.
//!
//! WASM has no process environment, so the API base URL is baked in when
//! the crate is compiled, the same way the bundler injected it for the
//! old client.

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001/api/v1";

/// The backend base URL, taken from `ATRIUM_API_URL` at build time and
/// falling back to the local development server.
pub fn api_base_url() -> String {
    from_build_env(option_env!("ATRIUM_API_URL"))
}

fn from_build_env(value: Option<&str>) -> String {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_URL.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{from_build_env, DEFAULT_API_URL};
    use test_case::test_case;

    #[test_case(None, DEFAULT_API_URL; "unset")]
    #[test_case(Some(""), DEFAULT_API_URL; "empty")]
    #[test_case(Some("   "), DEFAULT_API_URL; "blank")]
    #[test_case(Some("https://api.atrium.example/api/v1"), "https://api.atrium.example/api/v1"; "plain")]
    #[test_case(Some("https://api.atrium.example/api/v1/"), "https://api.atrium.example/api/v1"; "trailing_slash")]
    #[test_case(Some(" https://api.atrium.example "), "https://api.atrium.example"; "padded")]
    fn from_build_env_normalizes(value: Option<&str>, expected: &str) {
        assert_eq!(from_build_env(value), expected);
    }
}
