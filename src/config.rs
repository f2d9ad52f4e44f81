//! Configuration for the console writers

/// Options shared by the list and sorted writers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Appended to the format for every element of a list
    pub line_terminator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_terminator: "\n".to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text appended after each element
    pub fn with_line_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.line_terminator = terminator.into();
        self
    }

    /// The per-element format used by the list writers
    pub(crate) fn line_format(&self, format: &str) -> String {
        format!("{}{}", format, self.line_terminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.line_terminator, "\n");
        assert_eq!(config.line_format("${a}"), "${a}\n");
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new().with_line_terminator("\r\n");
        assert_eq!(config.line_format("x"), "x\r\n");
    }
}
