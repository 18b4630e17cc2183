pub const APP_NAME: &str = "ReCell";
pub const APP_TAGLINE: &str = "Sell your phone. Buy refurbished.";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");
pub const SUPPORT_HOTLINE: &str = "1800-RECELL-99";

/// Release tag when built from a tagged checkout, else the crate version
/// with the short commit hash if one is known.
pub fn version_label() -> String {
    format_label(GIT_TAG, APP_VERSION, GIT_COMMIT)
}

fn format_label(tag: Option<&str>, version: &str, commit: Option<&str>) -> String {
    match (tag, commit) {
        (Some(tag), _) => tag.to_string(),
        (None, Some(commit)) => format!("v{version}+{commit}"),
        (None, None) => format!("v{version}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_wins_over_version() {
        assert_eq!(format_label(Some("v1.2.0"), "1.0.0", Some("abc123")), "v1.2.0");
    }

    #[test]
    fn untagged_builds_show_commit() {
        assert_eq!(format_label(None, "1.0.0", Some("abc123")), "v1.0.0+abc123");
        assert_eq!(format_label(None, "1.0.0", None), "v1.0.0");
    }
}
