use macros::loggable;

loggable! {
    SystemLog {
        #[error("Initializing")]
        Initializing => tracing::Level::INFO,

        #[error("Initialization completed")]
        InitializeComplete => tracing::Level::INFO,

        #[error("Online")]
        Online => tracing::Level::INFO,

        #[error("Termination in process")]
        Terminating => tracing::Level::INFO,

        #[error("Termination completed")]
        TerminateComplete => tracing::Level::INFO,

        #[error("Configuration file not found, using defaults")]
        DefaultConfigUsed => tracing::Level::WARN,

        #[error("Unrecognized language {value}, falling back to {fallback}")]
        LocaleFallback { value: String, fallback: String } => tracing::Level::WARN,

        #[error("Locale catalog {code} is missing key {key}")]
        CatalogKeyMissing { code: String, key: String } => tracing::Level::WARN,

        #[error("Could not format message {key}: {reason}")]
        MessageFormatFailed { key: String, reason: String } => tracing::Level::WARN,

        #[error("Language switched to {code}")]
        LanguageChanged { code: String } => tracing::Level::INFO,

        #[error("Gui Exited")]
        GuiExited => tracing::Level::INFO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macros::log;

    #[test]
    fn entries_carry_their_declared_level() {
        assert_eq!(SystemLog::Online.level(), tracing::Level::INFO);
        assert_eq!(SystemLog::DefaultConfigUsed.level(), tracing::Level::WARN);

        let entry = SystemLog::CatalogKeyMissing {
            code: "pt_BR".to_string(),
            key: "close".to_string(),
        };
        assert_eq!(entry.level(), tracing::Level::WARN);
        assert_eq!(entry.to_string(), "Locale catalog pt_BR is missing key close");

        log!(entry);
        log!(entry, "startup audit");
    }
}
