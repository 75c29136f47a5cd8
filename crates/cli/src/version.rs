/// Build metadata captured by `build.rs`
#[derive(Debug, Clone, Copy)]
pub struct BuildInfo {
    pub package_version: &'static str,
    pub repo_version: &'static str,
    pub build_profile: &'static str,
    pub build_timestamp: &'static str,
    pub rust_version: &'static str,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        package_version: env!("CARGO_PKG_VERSION"),
        repo_version: env!("WIKI_REPO_VERSION"),
        build_profile: env!("WIKI_BUILD_PROFILE"),
        build_timestamp: env!("WIKI_BUILD_TIMESTAMP"),
        rust_version: env!("WIKI_RUST_VERSION"),
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "wiki {} ({}, {} build, {}, {})",
            self.package_version,
            self.repo_version,
            self.build_profile,
            self.build_timestamp,
            self.rust_version
        )
    }
}
