#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderSelectionMode {
    First,
    Second,
}
