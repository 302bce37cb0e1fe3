//! Endpoint URL helpers.

use reqwest::Url;

/// Join a base URL and an endpoint path with exactly one slash between them.
///
/// ```
/// use personabot::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("https://api.groq.com/openai/v1/", "/chat/completions"),
///     "https://api.groq.com/openai/v1/chat/completions"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{base}/{endpoint}")
}

/// Accepts only absolute http(s) URLs with a valid host part.
///
/// Returns the input trimmed of whitespace and trailing slashes.
pub fn validate_base_url(input: &str) -> Result<String, String> {
    let trimmed = input.trim();
    let parsed =
        Url::parse(trimmed).map_err(|err| format!("Invalid base URL '{trimmed}': {err}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!("Base URL must start with http:// or https://: {trimmed}"));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(format!("Base URL is missing a host: {trimmed}"));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construct_api_url_normalizes_slashes() {
        let cases = [
            ("https://api.groq.com/openai/v1", "chat/completions"),
            ("https://api.groq.com/openai/v1/", "chat/completions"),
            ("https://api.groq.com/openai/v1///", "/chat/completions"),
            ("https://api.groq.com/openai/v1", "///chat/completions"),
        ];
        for (base, endpoint) in cases {
            assert_eq!(
                construct_api_url(base, endpoint),
                "https://api.groq.com/openai/v1/chat/completions",
                "base={base:?} endpoint={endpoint:?}"
            );
        }
    }

    #[test]
    fn validate_base_url_accepts_http_and_https() {
        assert_eq!(
            validate_base_url(" https://api.groq.com/openai/v1/ "),
            Ok("https://api.groq.com/openai/v1".to_string())
        );
        assert_eq!(
            validate_base_url("http://127.0.0.1:8080"),
            Ok("http://127.0.0.1:8080".to_string())
        );
    }

    #[test]
    fn validate_base_url_rejects_other_inputs() {
        assert!(validate_base_url("api.groq.com").is_err());
        assert!(validate_base_url("ftp://example.com").is_err());
        assert!(validate_base_url("https://").is_err());
        assert!(validate_base_url("https://exa mple/v1").is_err());
        assert!(validate_base_url("mailto:someone@example.com").is_err());
    }
}
