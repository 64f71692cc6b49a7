//! Case conversion and token helpers.
//!
//! Conversions are ASCII-only: non-ASCII characters pass through untouched.

use rand::Rng;

const URL_FRIENDLY_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// `camelCase` / `PascalCase` to `kebab-case`. Every uppercase letter after
/// the first character starts a new word, so `XMLHttpRequest` becomes
/// `x-m-l-http-request`.
pub fn to_kebab_case(value: &str) -> String {
    split_words(value, '-')
}

pub fn to_snake_case(value: &str) -> String {
    split_words(value, '_')
}

fn split_words(value: &str, separator: char) -> String {
    let mut out = String::with_capacity(value.len() + value.len() / 2);
    for (idx, ch) in value.chars().enumerate() {
        if idx > 0 && ch.is_ascii_uppercase() {
            out.push(separator);
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

/// Lowercases after trimming surrounding spaces, tabs, line breaks, vertical
/// tabs and NUL bytes. Form feeds are kept.
pub fn sanitize_lowercase(value: &str) -> String {
    value
        .trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B'))
        .to_ascii_lowercase()
}

pub fn to_lowercase(value: &str) -> String {
    value.to_ascii_lowercase()
}

pub fn first_to_lowercase(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(value.len());
            out.push(first.to_ascii_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Random token of `length` characters from `[a-z0-9]`.
pub fn generate_url_friendly_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| URL_FRIENDLY_CHARSET[rng.gen_range(0..URL_FRIENDLY_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_and_snake_case_split_on_uppercase() {
        let cases = [
            ("camelCase", "camel-case", "camel_case"),
            ("PascalCase", "pascal-case", "pascal_case"),
            ("XMLHttpRequest", "x-m-l-http-request", "x_m_l_http_request"),
            ("simple", "simple", "simple"),
            ("", "", ""),
        ];

        for (input, kebab, snake) in cases {
            assert_eq!(to_kebab_case(input), kebab);
            assert_eq!(to_snake_case(input), snake);
        }
    }

    #[test]
    fn sanitize_lowercase_trims_and_lowercases() {
        assert_eq!(sanitize_lowercase("  HeLLo World  "), "hello world");
        assert_eq!(sanitize_lowercase("TEST"), "test");
        assert_eq!(sanitize_lowercase("  mixed CASE\n"), "mixed case");
        assert_eq!(sanitize_lowercase("\0\tTabbed\r\n"), "tabbed");
        assert_eq!(sanitize_lowercase("\x0BVertical\x0B"), "vertical");
        assert_eq!(sanitize_lowercase("\x0CAbc"), "\x0Cabc");
    }

    #[test]
    fn to_lowercase_leaves_non_ascii_alone() {
        assert_eq!(to_lowercase("Hello"), "hello");
        assert_eq!(to_lowercase("Already lowercase"), "already lowercase");
        assert_eq!(to_lowercase("ÄBC"), "Äbc");
    }

    #[test]
    fn first_to_lowercase_only_touches_first_char() {
        assert_eq!(first_to_lowercase("HelloWorld"), "helloWorld");
        assert_eq!(first_to_lowercase("Test"), "test");
        assert_eq!(first_to_lowercase("aAlreadyLower"), "aAlreadyLower");
        assert_eq!(first_to_lowercase(""), "");
    }

    #[test]
    fn url_friendly_string_has_requested_length_and_charset() {
        let token = generate_url_friendly_string(16);
        assert_eq!(token.len(), 16);
        assert!(
            token
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        );
        assert!(generate_url_friendly_string(0).is_empty());
    }
}
