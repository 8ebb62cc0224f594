use crate::model::message_key::MessageKey;

/// Source of user-visible text for one locale.
pub trait TextLookup {
    /// Formats the message `key`, filling its `$name` variables from `args`.
    fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String;

    fn text(&self, key: MessageKey) -> String {
        self.format(key, &[])
    }
}
