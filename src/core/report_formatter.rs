use crate::interface::text_lookup::TextLookup;
use crate::model::error::Error;
use crate::model::error::comparison::ComparisonError;
use crate::model::message_key::MessageKey;
use crate::model::report::DirectoryReport;
use std::path::Path;

/// Renders reports and errors as localized lines for display.
pub struct ReportFormatter;

impl ReportFormatter {
    /// One line per difference: differing files first, then first-only,
    /// second-only and uncomparable entries, each group sorted by name.
    pub fn format(report: &DirectoryReport, lookup: &impl TextLookup) -> Vec<String> {
        let mut lines = Vec::with_capacity(report.difference_count());

        for file in &report.differing_files {
            lines.push(lookup.format(
                MessageKey::DifferentFile,
                &[("file", display(file).as_str())],
            ));
        }

        let first = display(&report.first);
        for file in &report.only_in_first {
            lines.push(lookup.format(
                MessageKey::FileOnlyIn,
                &[("folder", first.as_str()), ("file", display(file).as_str())],
            ));
        }

        let second = display(&report.second);
        for file in &report.only_in_second {
            lines.push(lookup.format(
                MessageKey::FileOnlyIn,
                &[("folder", second.as_str()), ("file", display(file).as_str())],
            ));
        }

        for file in &report.uncomparable {
            lines.push(lookup.format(
                MessageKey::CouldNotCompare,
                &[("file", display(file).as_str())],
            ));
        }

        lines
    }

    pub fn summary(report: &DirectoryReport, lookup: &impl TextLookup) -> String {
        if report.is_identical() {
            lookup.text(MessageKey::FoldersIdentical)
        } else {
            let count = report.difference_count().to_string();
            lookup.format(MessageKey::DifferenceCount, &[("count", count.as_str())])
        }
    }

    pub fn compared_at(report: &DirectoryReport, lookup: &impl TextLookup) -> String {
        let time = report.compared_at.format("%H:%M:%S").to_string();
        lookup.format(MessageKey::ComparedAt, &[("time", time.as_str())])
    }

    pub fn error_message(error: &Error, lookup: &impl TextLookup) -> String {
        match error {
            Error::Comparison(error) => Self::comparison_error_message(error, lookup),
            other => lookup.format(
                MessageKey::UnexpectedError,
                &[("error", other.to_string().as_str())],
            ),
        }
    }

    fn comparison_error_message(error: &ComparisonError, lookup: &impl TextLookup) -> String {
        match error {
            ComparisonError::MissingSelection => lookup.text(MessageKey::SelectBothFolders),
            ComparisonError::PathNotFound { path } => {
                lookup.format(MessageKey::PathNotFound, &[("path", display(path).as_str())])
            }
            ComparisonError::NotADirectory { path } => {
                lookup.format(MessageKey::NotADirectory, &[("path", display(path).as_str())])
            }
            ComparisonError::PermissionDenied { path } => {
                lookup.format(MessageKey::PermissionDenied, &[("path", display(path).as_str())])
            }
            ComparisonError::ReadDirectoryFailed { path } => {
                lookup.format(MessageKey::ReadDirectoryFailed, &[("path", display(path).as_str())])
            }
        }
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}
