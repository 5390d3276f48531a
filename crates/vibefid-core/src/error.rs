use std::fmt;

/// Machine-readable error codes for callers that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    InvalidFid,
    NonFiniteSeed,
    InvalidScore,
    InvalidRange,
    RateLimited,
    StoreUnavailable,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1002",
            Self::InvalidFid => "E2001",
            Self::NonFiniteSeed => "E2002",
            Self::InvalidScore => "E2003",
            Self::InvalidRange => "E2004",
            Self::RateLimited => "E4001",
            Self::StoreUnavailable => "E5001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::InvalidFid => "Invalid FID",
            Self::NonFiniteSeed => "Seed is not a finite number",
            Self::InvalidScore => "Score outside [0, 1]",
            Self::InvalidRange => "Invalid FID range",
            Self::RateLimited => "Rate limit exceeded",
            Self::StoreUnavailable => "Key-value store unavailable",
        }
    }

    /// Optional remediation hint that can be surfaced to operators.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in vibefid.toml and retry."),
            Self::InvalidFid => {
                Some("FIDs are non-negative integers no larger than 9007199254740991.")
            }
            Self::NonFiniteSeed => Some("Pass a finite number as the extra seed."),
            Self::InvalidScore => Some("Neynar scores range from 0.0 to 1.0."),
            Self::InvalidRange => {
                Some("Use --from <= --to and span at most 5000000 FIDs per run.")
            }
            Self::RateLimited => Some("Wait for the current window to reset."),
            Self::StoreUnavailable => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors produced by the core library.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VibeError {
    #[error("invalid FID {value}: {reason}")]
    InvalidFid { value: String, reason: &'static str },

    #[error("extra seed must be finite, got {0}")]
    NonFiniteSeed(f64),

    #[error("extra seed {0:?} is not a number")]
    UnparseableSeed(String),

    #[error("score {0} is not in [0, 1]")]
    InvalidScore(f64),

    #[error("invalid FID range {from}..={to}")]
    InvalidRange { from: u64, to: u64 },

    #[error("rate limit exceeded for {key}; retry in {retry_after_ms}ms")]
    RateLimited { key: String, retry_after_ms: i64 },

    #[error("store error: {0}")]
    Store(String),

    #[error("config error: {0}")]
    Config(String),
}

impl VibeError {
    /// The stable code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidFid { .. } => ErrorCode::InvalidFid,
            Self::NonFiniteSeed(_) | Self::UnparseableSeed(_) => ErrorCode::NonFiniteSeed,
            Self::InvalidScore(_) => ErrorCode::InvalidScore,
            Self::InvalidRange { .. } => ErrorCode::InvalidRange,
            Self::RateLimited { .. } => ErrorCode::RateLimited,
            Self::Store(_) => ErrorCode::StoreUnavailable,
            Self::Config(_) => ErrorCode::ConfigParseError,
        }
    }

    /// Remediation text, falling back to the code summary.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or_else(|| code.message()).to_string()
    }
}
