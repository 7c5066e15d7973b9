//! Exit codes for the `graphql-types` CLI.
//!
//! Each failure mode gets its own code so scripts can tell a bad config
//! apart from an unreadable schema or a broken document.

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including `--help` and `--version`
    Success = 0,
    /// Missing positional argument or unusable command line
    UsageError = 1,
    /// Configuration error (unreadable or invalid config file)
    ConfigError = 2,
    /// Schema load error (file not found, invalid SDL or introspection JSON)
    SchemaError = 3,
    /// I/O error while locating or reading documents
    IoError = 4,
    /// Parse error (invalid GraphQL syntax in a document)
    ParseError = 5,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::UsageError => write!(f, "usage error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema load error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "document parse error"),
        }
    }
}
