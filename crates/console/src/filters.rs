//! Custom Askama template filters.

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(
    _value: impl std::fmt::Display,
    _env: &dyn askama::Values,
) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Initials for the header avatar, e.g. "Meera Nair" becomes "MN".
///
/// Usage in templates: `{{ name|initials }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn initials(name: impl std::fmt::Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(initials_of(&name.to_string()))
}

fn initials_of(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_of() {
        assert_eq!(initials_of("Meera Nair"), "MN");
        assert_eq!(initials_of("  arjun  "), "A");
        assert_eq!(initials_of("Lakshmi Priya Iyer"), "LP");
        assert_eq!(initials_of(""), "");
    }
}
