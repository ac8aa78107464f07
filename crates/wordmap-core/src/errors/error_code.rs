//! WordmapErrorCode trait for CLI diagnostics.

/// Trait for mapping wordmap errors to stable error codes.
/// Every error enum implements this so the CLI can prefix fatal
/// diagnostics with a structured code string.
pub trait WordmapErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the CLI boundary.
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const WRITE_ERROR: &str = "WRITE_ERROR";
