use macros::loggable;
use std::path::PathBuf;

loggable! {
    ComparisonLog {
        #[error("Comparing {first} with {second}")]
        Started { first: PathBuf, second: PathBuf } => tracing::Level::INFO,

        #[error("Comparison finished: {differing} differing, {only_in_first} only in first, {only_in_second} only in second, {uncomparable} uncomparable")]
        Finished {
            differing: usize,
            only_in_first: usize,
            only_in_second: usize,
            uncomparable: usize,
        } => tracing::Level::INFO,

        #[error("Could not compare file: {path}")]
        FileUncomparable { path: PathBuf } => tracing::Level::WARN,

        #[error("Skipping ignored entry: {name}")]
        EntryIgnored { name: String } => tracing::Level::TRACE,
    }
}
