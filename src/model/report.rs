use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Outcome of comparing two directory roots.
///
/// Every entry name lands in at most one of the four sets; names that are
/// identical on both sides are left out entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryReport {
    pub first: PathBuf,
    pub second: PathBuf,
    pub only_in_first: BTreeSet<PathBuf>,
    pub only_in_second: BTreeSet<PathBuf>,
    pub differing_files: BTreeSet<PathBuf>,
    pub uncomparable: BTreeSet<PathBuf>,
    pub compared_at: DateTime<Local>,
}

impl DirectoryReport {
    pub fn new(first: PathBuf, second: PathBuf) -> Self {
        Self {
            first,
            second,
            only_in_first: BTreeSet::new(),
            only_in_second: BTreeSet::new(),
            differing_files: BTreeSet::new(),
            uncomparable: BTreeSet::new(),
            compared_at: Local::now(),
        }
    }

    pub fn is_identical(&self) -> bool {
        self.only_in_first.is_empty()
            && self.only_in_second.is_empty()
            && self.differing_files.is_empty()
            && self.uncomparable.is_empty()
    }

    pub fn difference_count(&self) -> usize {
        self.only_in_first.len()
            + self.only_in_second.len()
            + self.differing_files.len()
            + self.uncomparable.len()
    }
}
