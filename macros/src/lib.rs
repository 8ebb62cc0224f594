mod log;
mod loggable;

use proc_macro::TokenStream;

/// Emits a loggable value at its own level: `log!(entry)` or `log!(entry, context)`.
#[proc_macro]
pub fn log(input: TokenStream) -> TokenStream {
    log::log_impl(input)
}

/// Declares an error/log enum whose variants carry a message and a `tracing::Level`.
#[proc_macro]
pub fn loggable(input: TokenStream) -> TokenStream {
    loggable::loggable_impl(input)
}
