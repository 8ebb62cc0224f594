use crate::model::comparison_mode::ComparisonMode;
use crate::model::config::{Config, DEFAULT_IGNORES};
use crate::model::error::comparison::ComparisonError;
use crate::model::log::comparison::ComparisonLog;
use crate::model::report::DirectoryReport;
use crate::utils::file_compare::files_equal;
use macros::log;
use std::collections::{BTreeMap, HashSet};
use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

struct Entry {
    // None when the entry cannot be stat'ed, e.g. a dangling symlink
    metadata: Option<Metadata>,
    is_symlink: bool,
}

/// Classifies the entries of two directories into first-only, second-only,
/// differing and uncomparable.
///
/// Only the immediate children are compared unless `recursive` is set, in which
/// case common subdirectories are walked too and nested entries are reported by
/// their path relative to the roots. Symlinked directories are never descended.
#[derive(Debug, Clone)]
pub struct DirectoryComparator {
    mode: ComparisonMode,
    recursive: bool,
    ignore: HashSet<OsString>,
}

impl Default for DirectoryComparator {
    fn default() -> Self {
        Self::new(
            ComparisonMode::default(),
            false,
            DEFAULT_IGNORES.iter().map(|name| name.to_string()),
        )
    }
}

impl DirectoryComparator {
    pub fn new(
        mode: ComparisonMode,
        recursive: bool,
        ignore: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            mode,
            recursive,
            ignore: ignore.into_iter().map(OsString::from).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.comparison_mode,
            config.recursive,
            config.ignore.iter().cloned(),
        )
    }

    pub fn compare(&self, first: &Path, second: &Path) -> Result<DirectoryReport, ComparisonError> {
        Self::check_root(first)?;
        Self::check_root(second)?;

        log!(ComparisonLog::Started {
            first: first.to_path_buf(),
            second: second.to_path_buf(),
        });

        let first_entries = self.list_directory(first)?;
        let second_entries = self.list_directory(second)?;

        let mut report = DirectoryReport::new(first.to_path_buf(), second.to_path_buf());
        self.classify(
            first,
            second,
            Path::new(""),
            first_entries,
            second_entries,
            &mut report,
        );

        log!(ComparisonLog::Finished {
            differing: report.differing_files.len(),
            only_in_first: report.only_in_first.len(),
            only_in_second: report.only_in_second.len(),
            uncomparable: report.uncomparable.len(),
        });
        Ok(report)
    }

    fn check_root(path: &Path) -> Result<(), ComparisonError> {
        match fs::metadata(path) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(ComparisonError::NotADirectory {
                path: path.to_path_buf(),
            }),
            Err(err) => Err(Self::map_io_error(path, &err)),
        }
    }

    fn map_io_error(path: &Path, err: &io::Error) -> ComparisonError {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => ComparisonError::PathNotFound { path },
            io::ErrorKind::NotADirectory => ComparisonError::NotADirectory { path },
            io::ErrorKind::PermissionDenied => ComparisonError::PermissionDenied { path },
            _ => ComparisonError::ReadDirectoryFailed { path },
        }
    }

    fn list_directory(&self, path: &Path) -> Result<BTreeMap<OsString, Entry>, ComparisonError> {
        let reader = fs::read_dir(path).map_err(|err| Self::map_io_error(path, &err))?;
        let mut entries = BTreeMap::new();
        for entry in reader {
            let entry = entry.map_err(|err| Self::map_io_error(path, &err))?;
            let name = entry.file_name();
            if self.ignore.contains(&name) {
                log!(ComparisonLog::EntryIgnored {
                    name: name.to_string_lossy().to_string(),
                });
                continue;
            }
            let is_symlink = entry
                .file_type()
                .map(|file_type| file_type.is_symlink())
                .unwrap_or(false);
            let metadata = fs::metadata(entry.path()).ok();
            entries.insert(
                name,
                Entry {
                    metadata,
                    is_symlink,
                },
            );
        }
        Ok(entries)
    }

    fn classify(
        &self,
        first_dir: &Path,
        second_dir: &Path,
        prefix: &Path,
        mut first_entries: BTreeMap<OsString, Entry>,
        second_entries: BTreeMap<OsString, Entry>,
        report: &mut DirectoryReport,
    ) {
        for (name, second_entry) in second_entries {
            let relative = prefix.join(&name);
            let Some(first_entry) = first_entries.remove(&name) else {
                report.only_in_second.insert(relative);
                continue;
            };
            self.compare_common(
                &first_dir.join(&name),
                &first_entry,
                &second_dir.join(&name),
                &second_entry,
                relative,
                report,
            );
        }

        report.only_in_first.extend(
            first_entries
                .into_keys()
                .map(|name| prefix.join(name)),
        );
    }

    fn compare_common(
        &self,
        first_path: &Path,
        first_entry: &Entry,
        second_path: &Path,
        second_entry: &Entry,
        relative: PathBuf,
        report: &mut DirectoryReport,
    ) {
        let (Some(first_meta), Some(second_meta)) = (&first_entry.metadata, &second_entry.metadata)
        else {
            log!(ComparisonLog::FileUncomparable { path: relative.clone() });
            report.uncomparable.insert(relative);
            return;
        };

        if first_meta.is_dir() && second_meta.is_dir() {
            if self.recursive && !first_entry.is_symlink && !second_entry.is_symlink {
                self.compare_nested(first_path, second_path, relative, report);
            }
            return;
        }

        if first_meta.is_dir() != second_meta.is_dir() {
            report.differing_files.insert(relative);
            return;
        }

        if !first_meta.is_file() || !second_meta.is_file() {
            log!(ComparisonLog::FileUncomparable { path: relative.clone() });
            report.uncomparable.insert(relative);
            return;
        }

        match files_equal(first_path, first_meta, second_path, second_meta, self.mode) {
            Ok(true) => {}
            Ok(false) => {
                report.differing_files.insert(relative);
            }
            Err(err) => {
                log!(
                    ComparisonLog::FileUncomparable { path: relative.clone() },
                    err
                );
                report.uncomparable.insert(relative);
            }
        }
    }

    fn compare_nested(
        &self,
        first_dir: &Path,
        second_dir: &Path,
        relative: PathBuf,
        report: &mut DirectoryReport,
    ) {
        let listings = self
            .list_directory(first_dir)
            .and_then(|first| Ok((first, self.list_directory(second_dir)?)));
        match listings {
            Ok((first_entries, second_entries)) => self.classify(
                first_dir,
                second_dir,
                &relative,
                first_entries,
                second_entries,
                report,
            ),
            Err(err) => {
                log!(err);
                report.uncomparable.insert(relative);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::comparison_mode::HashType;
    use std::collections::BTreeSet;
    use std::time::{Duration, SystemTime};

    fn names(set: &BTreeSet<PathBuf>) -> Vec<String> {
        set.iter()
            .map(|path| path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    fn tree(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }
        dir
    }

    fn compare(first: &tempfile::TempDir, second: &tempfile::TempDir) -> DirectoryReport {
        DirectoryComparator::default()
            .compare(first.path(), second.path())
            .unwrap()
    }

    #[test]
    fn directory_compared_with_itself_is_identical() {
        let dir = tree(&[("a.txt", "1"), ("sub/b.txt", "2")]);
        let report = compare(&dir, &dir);
        assert!(report.is_identical());
    }

    #[test]
    fn identical_entries_are_omitted() {
        let first = tree(&[("same.txt", "content"), ("x.txt", "hello")]);
        let second = tree(&[("same.txt", "content"), ("x.txt", "world")]);
        let report = compare(&first, &second);
        assert_eq!(names(&report.differing_files), vec!["x.txt"]);
        assert!(report.only_in_first.is_empty());
        assert!(report.only_in_second.is_empty());
        assert!(report.uncomparable.is_empty());
    }

    #[test]
    fn differing_content_with_same_name() {
        let first = tree(&[("x.txt", "hello")]);
        let second = tree(&[("x.txt", "world")]);
        let report = compare(&first, &second);
        assert_eq!(names(&report.differing_files), vec!["x.txt"]);
        assert!(report.only_in_first.is_empty());
        assert!(report.only_in_second.is_empty());
    }

    #[test]
    fn names_on_one_side_only() {
        let first = tree(&[("a.txt", "1")]);
        let second = tree(&[("b.txt", "2")]);
        let report = compare(&first, &second);
        assert_eq!(names(&report.only_in_first), vec!["a.txt"]);
        assert_eq!(names(&report.only_in_second), vec!["b.txt"]);
        assert!(report.differing_files.is_empty());
    }

    #[test]
    fn empty_first_directory() {
        let first = tree(&[]);
        let second = tree(&[("c.txt", "x")]);
        let report = compare(&first, &second);
        assert!(report.only_in_first.is_empty());
        assert_eq!(names(&report.only_in_second), vec!["c.txt"]);
    }

    #[test]
    fn swapping_arguments_swaps_one_sided_sets() {
        let first = tree(&[("a.txt", "1"), ("x.txt", "hello"), ("only/inner.txt", "i")]);
        let second = tree(&[("b.txt", "2"), ("x.txt", "world")]);
        let forward = compare(&first, &second);
        let backward = compare(&second, &first);
        assert_eq!(forward.only_in_first, backward.only_in_second);
        assert_eq!(forward.only_in_second, backward.only_in_first);
        assert_eq!(forward.differing_files, backward.differing_files);
        assert_eq!(names(&forward.only_in_first), vec!["a.txt", "only"]);
    }

    #[test]
    fn sets_are_disjoint() {
        let first = tree(&[("a.txt", "1"), ("x.txt", "hello"), ("same.txt", "s")]);
        let second = tree(&[("b.txt", "2"), ("x.txt", "world"), ("same.txt", "s")]);
        let report = compare(&first, &second);
        let sets = [
            &report.only_in_first,
            &report.only_in_second,
            &report.differing_files,
            &report.uncomparable,
        ];
        for (index, set) in sets.iter().enumerate() {
            for other in &sets[index + 1..] {
                assert!(set.is_disjoint(other));
            }
        }
    }

    #[test]
    fn missing_path_is_reported_without_partial_report() {
        let first = tree(&[("a.txt", "1")]);
        let missing = first.path().join("does-not-exist");
        let result = DirectoryComparator::default().compare(first.path(), &missing);
        assert_eq!(result, Err(ComparisonError::PathNotFound { path: missing.clone() }));
        let result = DirectoryComparator::default().compare(&missing, first.path());
        assert_eq!(result, Err(ComparisonError::PathNotFound { path: missing }));
    }

    #[test]
    fn file_instead_of_directory_is_rejected() {
        let first = tree(&[("a.txt", "1")]);
        let file = first.path().join("a.txt");
        let result = DirectoryComparator::default().compare(first.path(), &file);
        assert_eq!(result, Err(ComparisonError::NotADirectory { path: file }));
    }

    #[test]
    fn ignored_names_never_appear() {
        let first = tree(&[(".git/HEAD", "ref: main"), ("__pycache__/m.pyc", "x")]);
        let second = tree(&[("CVS/Root", "cvs")]);
        let report = compare(&first, &second);
        assert!(report.is_identical());

        let comparator = DirectoryComparator::new(
            ComparisonMode::Content,
            false,
            vec!["secret.txt".to_string()],
        );
        let first = tree(&[("secret.txt", "a"), ("CVS/Root", "cvs")]);
        let second = tree(&[]);
        let report = comparator.compare(first.path(), second.path()).unwrap();
        assert_eq!(names(&report.only_in_first), vec!["CVS"]);
    }

    #[test]
    fn kind_mismatch_counts_as_differing() {
        let first = tree(&[("entry", "a file")]);
        let second = tree(&[("entry/inner.txt", "a directory")]);
        let report = compare(&first, &second);
        assert_eq!(names(&report.differing_files), vec!["entry"]);
    }

    #[test]
    fn shallow_comparison_does_not_descend() {
        let first = tree(&[("sub/x.txt", "hello"), ("sub/a.txt", "1")]);
        let second = tree(&[("sub/x.txt", "world")]);
        let report = compare(&first, &second);
        assert!(report.is_identical());
    }

    #[test]
    fn recursive_comparison_reports_relative_paths() {
        let first = tree(&[("sub/x.txt", "hello"), ("sub/a.txt", "1"), ("sub/deep/d.txt", "d")]);
        let second = tree(&[("sub/x.txt", "world"), ("sub/deep/d.txt", "d"), ("sub/deep/e.txt", "e")]);
        let comparator = DirectoryComparator::new(ComparisonMode::Content, true, Vec::new());
        let report = comparator.compare(first.path(), second.path()).unwrap();
        assert_eq!(names(&report.differing_files), vec!["sub/x.txt"]);
        assert_eq!(names(&report.only_in_first), vec!["sub/a.txt"]);
        assert_eq!(names(&report.only_in_second), vec!["sub/deep/e.txt"]);
    }

    #[test]
    fn every_mode_agrees_on_changed_content() {
        let first = tree(&[("x.txt", "hello"), ("same.txt", "same")]);
        let second = tree(&[("x.txt", "world!"), ("same.txt", "same")]);
        let modes = [
            ComparisonMode::Shallow,
            ComparisonMode::Content,
            ComparisonMode::Checksum(HashType::MD5),
            ComparisonMode::Checksum(HashType::SHA3),
            ComparisonMode::Checksum(HashType::SHA256),
            ComparisonMode::Checksum(HashType::BLAKE2B),
            ComparisonMode::Checksum(HashType::BLAKE2S),
            ComparisonMode::Checksum(HashType::BLAKE3),
        ];
        for mode in modes {
            let comparator = DirectoryComparator::new(mode, false, Vec::new());
            let report = comparator.compare(first.path(), second.path()).unwrap();
            assert_eq!(names(&report.differing_files), vec!["x.txt"], "{mode:?}");
        }
    }

    #[test]
    fn shallow_mode_verifies_content_when_signatures_differ() {
        let first = tree(&[("x.txt", "same")]);
        let second = tree(&[("x.txt", "same")]);
        let file = fs::OpenOptions::new()
            .write(true)
            .open(second.path().join("x.txt"))
            .unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(3600))
            .unwrap();
        let comparator = DirectoryComparator::new(ComparisonMode::Shallow, false, Vec::new());
        let report = comparator.compare(first.path(), second.path()).unwrap();
        assert!(report.is_identical());
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_on_both_sides_is_uncomparable() {
        let first = tree(&[]);
        let second = tree(&[]);
        std::os::unix::fs::symlink("missing-target", first.path().join("link")).unwrap();
        std::os::unix::fs::symlink("missing-target", second.path().join("link")).unwrap();
        let report = compare(&first, &second);
        assert_eq!(names(&report.uncomparable), vec!["link"]);
        assert!(report.differing_files.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_directories_are_not_descended() {
        let first = tree(&[("real/x.txt", "hello")]);
        let second = tree(&[("real/x.txt", "hello")]);
        std::os::unix::fs::symlink(first.path(), first.path().join("loop")).unwrap();
        std::os::unix::fs::symlink(second.path(), second.path().join("loop")).unwrap();
        let comparator = DirectoryComparator::new(ComparisonMode::Content, true, Vec::new());
        let report = comparator.compare(first.path(), second.path()).unwrap();
        assert!(report.is_identical());
    }

    /// Makes `path` unreadable for the duration of `check`. Returns `false`
    /// without running it when the process can read the directory anyway.
    #[cfg(unix)]
    fn with_unreadable(path: &Path, check: impl FnOnce()) -> bool {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(0o000)).unwrap();
        let enforced = fs::read_dir(path).is_err();
        if enforced {
            check();
        }
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        enforced
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_root_is_permission_denied() {
        let first = tree(&[("a.txt", "1")]);
        let second = tree(&[("a.txt", "1")]);
        let enforced = with_unreadable(first.path(), || {
            let result = DirectoryComparator::default().compare(first.path(), second.path());
            assert_eq!(
                result,
                Err(ComparisonError::PermissionDenied {
                    path: first.path().to_path_buf(),
                })
            );
        });
        if !enforced {
            eprintln!("skipped: directory permissions are not enforced for this user");
        }
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_nested_directory_is_uncomparable() {
        let first = tree(&[("sub/x.txt", "hello"), ("a.txt", "1")]);
        let second = tree(&[("sub/x.txt", "hello"), ("a.txt", "1")]);
        let nested = first.path().join("sub");
        let enforced = with_unreadable(&nested, || {
            let comparator = DirectoryComparator::new(ComparisonMode::Content, true, Vec::new());
            let report = comparator.compare(first.path(), second.path()).unwrap();
            assert_eq!(names(&report.uncomparable), vec!["sub"]);
            assert!(report.differing_files.is_empty());
            assert!(report.only_in_first.is_empty());
            assert!(report.only_in_second.is_empty());
        });
        if !enforced {
            eprintln!("skipped: directory permissions are not enforced for this user");
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn rejected_roots_are_not_logged_as_started() {
        let captured = CapturedLog::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let existing = tree(&[("a.txt", "1")]);
        let missing = existing.path().join("missing");
        tracing::subscriber::with_default(subscriber, || {
            let comparator = DirectoryComparator::default();
            assert!(comparator.compare(&missing, existing.path()).is_err());
            comparator.compare(existing.path(), existing.path()).unwrap();
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(output.matches("Comparing ").count(), 1);
        assert_eq!(output.matches("Comparison finished").count(), 1);
        assert!(!output.contains("missing with"));
    }
}
