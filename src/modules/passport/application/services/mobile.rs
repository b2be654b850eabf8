use regex::Regex;
use std::sync::LazyLock;

/// The fixed national mobile pattern: 11 digits, `1` followed by 3/5/6/7/8.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1[35678]\d{9}$").expect("invalid mobile regex"));

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}
