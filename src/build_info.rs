//! Compile-time build information, shown by `simulate --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: crate version, commit and build date.
pub fn version_line() -> String {
    format!(
        "{} {} ({} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        BUILD_COMMIT,
        BUILD_DATE
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_commit_format() {
        // Should be 7 chars or "unknown"
        assert!(BUILD_COMMIT == "unknown" || BUILD_COMMIT.len() == 7);
    }

    #[test]
    fn test_build_date_format() {
        // Should be YYYY-MM-DD format
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_line_mentions_crate() {
        let line = version_line();
        assert!(line.starts_with("montecarlo "));
        assert!(line.contains(BUILD_DATE));
    }
}
