/// Result of applying one validator to a read or a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    /// The rule failed; the message says why.
    Fail(String),
}

impl Outcome {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    /// The failure message, if the outcome is a failure.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message),
        }
    }
}

/// One validator's outcome within a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub code: &'static str,
    pub outcome: Outcome,
}

/// Outcomes of one validation call, in catalog order.
///
/// A report is built fresh per read or pair and never mutated after it
/// is returned. Every selected validator contributes exactly one entry,
/// pass or fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<ReportEntry>,
}

impl ValidationReport {
    pub(crate) const fn new(entries: Vec<ReportEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validator codes in report order.
    #[must_use]
    pub fn codes(&self) -> Vec<&'static str> {
        self.entries.iter().map(|entry| entry.code).collect()
    }

    /// Entries whose outcome is a failure, in report order.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| entry.outcome.is_fail())
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|entry| entry.outcome.is_fail())
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ReportEntry;
    type IntoIter = std::slice::Iter<'a, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
