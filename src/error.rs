//! Error types for storage and configuration

/// Failures talking to the key-value store
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// No storage backend on this platform (e.g. LocalStorage disabled)
    #[error("storage unavailable")]
    Unavailable,

    /// Backend refused the read or write (quota, security policy)
    #[error("storage rejected {op} for key {key:?}")]
    Rejected { op: &'static str, key: String },

    /// Stored value is not a valid record
    #[error("corrupt record under {key:?}: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Record could not be encoded
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Invalid game configuration
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("canvas must have positive dimensions, got {width}x{height}")]
    Canvas { width: f32, height: f32 },

    #[error("{what} size must be positive and fit the canvas")]
    EntitySize { what: &'static str },

    #[error("asteroid speed range [{min}, {max}) is empty or non-positive")]
    SpeedRange { min: i32, max: i32 },

    #[error("{what} interval must be at least 1 ms")]
    Interval { what: &'static str },
}
