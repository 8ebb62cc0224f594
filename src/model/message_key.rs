/// Identifier of every piece of user-visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    AppTitle,
    LanguageLabel,
    SelectFirstFolder,
    SelectSecondFolder,
    CompareFolders,
    Comparing,
    DifferencesTitle,
    DifferenceCount,
    ComparedAt,
    Close,
    DifferentFile,
    FileOnlyIn,
    CouldNotCompare,
    FoldersIdentical,
    SelectBothFolders,
    PathNotFound,
    NotADirectory,
    PermissionDenied,
    ReadDirectoryFailed,
    UnexpectedError,
}

impl MessageKey {
    pub const ALL: [MessageKey; 20] = [
        MessageKey::AppTitle,
        MessageKey::LanguageLabel,
        MessageKey::SelectFirstFolder,
        MessageKey::SelectSecondFolder,
        MessageKey::CompareFolders,
        MessageKey::Comparing,
        MessageKey::DifferencesTitle,
        MessageKey::DifferenceCount,
        MessageKey::ComparedAt,
        MessageKey::Close,
        MessageKey::DifferentFile,
        MessageKey::FileOnlyIn,
        MessageKey::CouldNotCompare,
        MessageKey::FoldersIdentical,
        MessageKey::SelectBothFolders,
        MessageKey::PathNotFound,
        MessageKey::NotADirectory,
        MessageKey::PermissionDenied,
        MessageKey::ReadDirectoryFailed,
        MessageKey::UnexpectedError,
    ];

    /// Fluent message id in the locale catalogs.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::AppTitle => "app-title",
            MessageKey::LanguageLabel => "language-label",
            MessageKey::SelectFirstFolder => "select-first-folder",
            MessageKey::SelectSecondFolder => "select-second-folder",
            MessageKey::CompareFolders => "compare-folders",
            MessageKey::Comparing => "comparing",
            MessageKey::DifferencesTitle => "differences-title",
            MessageKey::DifferenceCount => "difference-count",
            MessageKey::ComparedAt => "compared-at",
            MessageKey::Close => "close",
            MessageKey::DifferentFile => "different-file",
            MessageKey::FileOnlyIn => "file-only-in",
            MessageKey::CouldNotCompare => "could-not-compare",
            MessageKey::FoldersIdentical => "folders-identical",
            MessageKey::SelectBothFolders => "select-both-folders",
            MessageKey::PathNotFound => "path-not-found",
            MessageKey::NotADirectory => "not-a-directory",
            MessageKey::PermissionDenied => "permission-denied",
            MessageKey::ReadDirectoryFailed => "read-directory-failed",
            MessageKey::UnexpectedError => "unexpected-error",
        }
    }
}
