use macros::loggable;

loggable! {
    SystemError {
        #[error("Invalid configuration: {reason}")]
        InvalidConfig { reason: String } => tracing::Level::ERROR,

        #[error("Failed to set up logging: {reason}")]
        LoggingSetupFailed { reason: String } => tracing::Level::ERROR,

        #[error("Locale catalog not found: {code}")]
        CatalogMissing { code: String } => tracing::Level::ERROR,

        #[error("Locale catalog is malformed: {code}")]
        InvalidCatalog { code: String } => tracing::Level::ERROR,
    }
}
