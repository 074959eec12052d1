/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub built_on: &'static str,
    pub profile: &'static str,
}

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("ENVELOPE_BUDGET_BUILD_HASH").unwrap_or("unknown"),
        built_on: option_env!("ENVELOPE_BUDGET_BUILD_DATE").unwrap_or("unknown"),
        profile: option_env!("ENVELOPE_BUDGET_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

impl BuildMetadata {
    pub fn summary(&self) -> String {
        format!(
            "envelope_budget {} ({} {}, built {})",
            self.version, self.git_hash, self.profile, self.built_on
        )
    }
}
