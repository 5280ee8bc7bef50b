//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "rpmlog.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "rpmlog.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".rpmlog.yaml";

/// How far back history is walked, in days
pub const DEFAULT_RECENCY_DAYS: u32 = 730;

/// Column at which changelog messages are wrapped
pub const DEFAULT_WRAP_WIDTH: usize = 75;

/// Indent prefixed to wrapped continuation lines
pub const DEFAULT_CONTINUATION_INDENT: &str = "  ";

/// File extensions that make a commit changelog-relevant
pub const DEFAULT_RELEVANT_EXTENSIONS: &[&str] = &[".spec", ".patch"];

/// Program queried for the package name, version and release
pub const DEFAULT_QUERY_PROGRAM: &str = "rpm";

/// Query format handed to the query program
pub const DEFAULT_QUERY_FORMAT: &str = "%{name}  %{version}  %{release}\n";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".rpmlog.toml",
    ]
}
