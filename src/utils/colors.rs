/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Percentage color:
/// \>= 80 → green
/// \>= 50 → yellow
/// otherwise → red
pub fn color_for_percentage(value: f64) -> &'static str {
    if value >= 80.0 {
        GREEN
    } else if value >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

/// Grey for missing optional cells (older result files), reset otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() => RESET,
        _ => GREY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_bands() {
        assert_eq!(color_for_percentage(100.0), GREEN);
        assert_eq!(color_for_percentage(60.0), YELLOW);
        assert_eq!(color_for_percentage(0.0), RED);
    }

    #[test]
    fn missing_fields_are_grey() {
        assert_eq!(color_for_optional_field::<&str>(None), GREY);
        assert_eq!(color_for_optional_field(Some(" ")), GREY);
        assert_eq!(color_for_optional_field(Some("2025-01-01")), RESET);
    }
}
