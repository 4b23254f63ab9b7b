//! Writer configuration.

/// Configuration for export writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Write the column header line (CSV only)
    pub include_header: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables the CSV header line.
    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.include_header = false;
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_header: true,
        }
    }
}
