//! Compile-time build information, shown by `flappy --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: `flappy <version> <date> (<commit>)`.
pub fn version_line() -> String {
    format!(
        "flappy {} {} ({})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}
