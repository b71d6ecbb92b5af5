//! Config serialization to TOML
//!
//! Single source of truth for the config file format.

use super::Config;

impl Config {
    /// Render this configuration as the commented TOML template written on
    /// first run and by `terra config --reset`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# terra configuration

# Country-data API base URL
api_url = "{api_url}"

# Directory holding the persistence store (favorites, session state)
data_dir = "{data_dir}"

# Theme: Dark, Light, Nord, Solarized
# Cycle at runtime with 't' in the TUI
theme = "{theme}"

# Cards per page. 0 = choose responsively from terminal width (1-4)
page_size = {page_size}

# Timeout for API requests, in seconds
request_timeout_secs = {timeout}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to TUI buffer or stdout)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = self.api_url,
            data_dir = self.data_dir.display(),
            theme = self.theme,
            page_size = self.page_size.unwrap_or(0),
            timeout = self.request_timeout_secs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
