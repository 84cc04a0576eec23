//! Build metadata baked in at compile time and surfaced on the health page.

/// Crate version from the manifest.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Git commit recorded by the build script; "unknown" outside a checkout.
pub fn git_commit_hash() -> &'static str {
    match option_env!("OTP_WEB_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::{git_commit_hash, version};

    #[test]
    fn version_matches_the_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn git_commit_hash_is_never_empty() {
        assert!(!git_commit_hash().is_empty());
    }
}
