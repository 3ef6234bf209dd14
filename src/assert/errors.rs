use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Actual and expected nodes differ
    Assertion(AssertionFailure),

    /// The assertion itself was set up wrong
    Configuration(ConfigurationError),
}

/// First difference found between the actual and the expected node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertionFailure {
    /// Path from the root of the comparison to the difference, root first
    pub crumbs: Vec<String>,
    pub message: String,

    /// Name of the comparator which decided the mismatch, if one was used
    pub comparator: Option<String>,
}

impl AssertionFailure {
    /// Crumb trail joined into one line (eg. `Class: class A > Has equal methods`)
    pub fn path(&self) -> String {
        self.crumbs.join(" > ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// One-by-one comparison needs to know how to pair up elements
    MissingKeyExtractor,

    /// Unrecognized methods comparison mode
    UnknownComparisonMode(String),
}

impl From<AssertionFailure> for Error {
    fn from(err: AssertionFailure) -> Error {
        Error::Assertion(err)
    }
}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Error {
        Error::Configuration(err)
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.crumbs.is_empty() {
            writeln!(f, "[{}] ", self.path())?;
        }
        f.write_str(&self.message)?;
        if let Some(comparator) = &self.comparator {
            write!(f, "\nwhen comparing values using {}", comparator)?;
        }
        Ok(())
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::MissingKeyExtractor => f.write_str(
                "Invalid assertion setup: no key extractor configured for a one-by-one comparison",
            ),
            ConfigurationError::UnknownComparisonMode(mode) => write!(
                f,
                "Invalid assertion setup: unknown methods comparison mode '{}'",
                mode
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Assertion(err) => err.fmt(f),
            Error::Configuration(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {}
