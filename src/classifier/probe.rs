//! Ordered probe registry.
//!
//! A probe is a regular expression over a benchmark name plus an extractor
//! turning its capture groups into an operation id and (optionally) a size.
//! Probes are tried in registration order and the first matching probe
//! decides the outcome, so narrow probes must be registered before broad ones.

use super::operation::OperationId;
use crate::utils::config::UNIT_SIZE;
use crate::utils::error::{ClassifyError, ProbeError};
use log::debug;
use regex::{Captures, Regex};
use std::fmt;

/// Turns the captures of a matched probe into a classification
pub type Extractor = Box<dyn Fn(&Captures<'_>) -> Option<Classification> + Send + Sync>;

/// Where a probe pattern may match inside a benchmark name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchoring {
    /// Match must begin at the first character (suffixes are ignored)
    Start,
    /// Match may occur anywhere in the name
    Anywhere,
}

/// Result of classifying a benchmark name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub operation: OperationId,

    /// Size captured from the name; `None` for size-less operations
    pub size: Option<u64>,
}

impl Classification {
    /// Classification of an operation with a size parameter
    pub fn sized(operation: impl Into<OperationId>, size: u64) -> Self {
        Self {
            operation: operation.into(),
            size: Some(size),
        }
    }

    /// Classification of an operation without a size parameter
    pub fn sizeless(operation: impl Into<OperationId>) -> Self {
        Self {
            operation: operation.into(),
            size: None,
        }
    }

    /// Size to record, defaulting to 1 for size-less operations
    pub fn size(&self) -> u64 {
        self.size.unwrap_or(UNIT_SIZE)
    }
}

/// One benchmark naming rule
pub struct Probe {
    source: String,
    regex: Regex,
    anchoring: Anchoring,
    extractor: Extractor,
}

impl Probe {
    /// Compile a probe
    ///
    /// # Errors
    /// * `ProbeError::InvalidPattern` - `pattern` is not a valid regex
    pub fn new<F>(pattern: &str, anchoring: Anchoring, extractor: F) -> Result<Self, ProbeError>
    where
        F: Fn(&Captures<'_>) -> Option<Classification> + Send + Sync + 'static,
    {
        let compiled = match anchoring {
            Anchoring::Start => format!("^(?:{})", pattern),
            Anchoring::Anywhere => pattern.to_string(),
        };

        let regex = Regex::new(&compiled).map_err(|source| ProbeError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
            anchoring,
            extractor: Box::new(extractor),
        })
    }

    /// Pattern as registered (without the anchor)
    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn anchoring(&self) -> Anchoring {
        self.anchoring
    }

    /// Whether the pattern matches `name`
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Apply the probe to `name`
    ///
    /// Returns `None` when the pattern does not match. A matching pattern
    /// whose extractor rejects the captures yields `Some(None)`.
    fn apply(&self, name: &str) -> Option<Option<Classification>> {
        let captures = self.regex.captures(name)?;
        Some((self.extractor)(&captures))
    }
}

impl fmt::Debug for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Probe")
            .field("pattern", &self.source)
            .field("anchoring", &self.anchoring)
            .finish_non_exhaustive()
    }
}

/// Ordered list of probes with first-match-wins semantics
#[derive(Debug, Default)]
pub struct ProbeRegistry {
    probes: Vec<Probe>,
}

impl ProbeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a probe (lowest precedence so far)
    pub fn push(&mut self, probe: Probe) {
        self.probes.push(probe);
    }

    /// Builder-style `push`
    pub fn with_probe(mut self, probe: Probe) -> Self {
        self.push(probe);
        self
    }

    /// Compile and append a probe
    pub fn register<F>(
        &mut self,
        pattern: &str,
        anchoring: Anchoring,
        extractor: F,
    ) -> Result<&mut Self, ProbeError>
    where
        F: Fn(&Captures<'_>) -> Option<Classification> + Send + Sync + 'static,
    {
        self.push(Probe::new(pattern, anchoring, extractor)?);
        Ok(self)
    }

    /// Append every probe of `other`, after the probes already registered
    pub fn extend(&mut self, other: ProbeRegistry) {
        self.probes.extend(other.probes);
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    pub fn probes(&self) -> impl Iterator<Item = &Probe> {
        self.probes.iter()
    }

    /// Classify a benchmark name
    ///
    /// **Public** - main entry point for classification
    ///
    /// Probes are tried in registration order; the first whose pattern
    /// matches decides the result and no later probe is consulted.
    ///
    /// # Errors
    /// * `ClassifyError::Unclassified` - no probe matched, or the matching
    ///   probe could not extract an operation from the name
    pub fn classify(&self, name: &str) -> Result<Classification, ClassifyError> {
        for (index, probe) in self.probes.iter().enumerate() {
            let Some(outcome) = probe.apply(name) else {
                continue;
            };

            return match outcome {
                Some(classification) => {
                    debug!(
                        "Probe #{} '{}' matched '{}' -> {} (size {})",
                        index,
                        probe.pattern(),
                        name,
                        classification.operation,
                        classification.size()
                    );
                    Ok(classification)
                }
                None => {
                    debug!("Probe #{} '{}' matched '{}' but extraction failed", index, probe.pattern(), name);
                    Err(ClassifyError::Unclassified(name.to_string()))
                }
            };
        }

        debug!("No probe found for '{}'", name);
        Err(ClassifyError::Unclassified(name.to_string()))
    }
}

/// Parse capture group `index` as a size
pub fn capture_size(captures: &Captures<'_>, index: usize) -> Option<u64> {
    captures.get(index)?.as_str().parse().ok()
}

/// Text of capture group `index`
pub fn capture_str<'h>(captures: &Captures<'h>, index: usize) -> Option<&'h str> {
    captures.get(index).map(|m| m.as_str())
}
