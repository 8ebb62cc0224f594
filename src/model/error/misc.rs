use macros::loggable;

loggable! {
    MiscError {
        #[error("Asset file not found: {name}")]
        AssetFileNotFound { name: String } => tracing::Level::ERROR,

        #[error("Failed to decode asset: {name}")]
        DeserializeError { name: String } => tracing::Level::ERROR,

        #[error("UI platform error: {message}")]
        UIPlatformError { message: String } => tracing::Level::ERROR,

        #[error("Comparison worker disconnected")]
        WorkerDisconnected => tracing::Level::ERROR,
    }
}
