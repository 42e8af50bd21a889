//! Process-wide Configuration
//!
//! Both values are baked in at build time via `option_env!`. Without a
//! usable owner id the app renders the onboarding notice and performs no
//! network activity.

/// Base URL of the task API, overridable with `TASKS_API_BASE`
pub fn api_base() -> &'static str {
    option_env!("TASKS_API_BASE").unwrap_or("http://localhost:3000")
}

/// Owner id scoping the task collection, from `TASKS_OWNER_ID`
pub fn owner_id() -> Option<u32> {
    parse_owner_id(option_env!("TASKS_OWNER_ID"))
}

/// An absent, unparsable, or zero id counts as "not configured"
fn parse_owner_id(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|id| *id != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_owner_id() {
        assert_eq!(parse_owner_id(None), None);
        assert_eq!(parse_owner_id(Some("")), None);
        assert_eq!(parse_owner_id(Some("abc")), None);
        assert_eq!(parse_owner_id(Some("0")), None);
        assert_eq!(parse_owner_id(Some("42")), Some(42));
        assert_eq!(parse_owner_id(Some(" 42 ")), Some(42));
    }
}
