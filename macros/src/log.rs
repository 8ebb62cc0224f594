use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Expr, Token, parse_macro_input};

struct LogInput {
    entry: Expr,
    context: Option<Expr>,
}

impl Parse for LogInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let entry = input.parse::<Expr>()?;

        let context = if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
            Some(input.parse::<Expr>()?)
        } else {
            None
        };

        if input.peek(Token![,]) {
            input.parse::<Token![,]>()?;
        }

        Ok(LogInput { entry, context })
    }
}

pub fn log_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LogInput);

    let entry_expr = &input.entry;

    if let Some(context) = &input.context {
        quote! {
            {
                let entry = &#entry_expr;
                let level = entry.level();
                let message = entry.to_string();
                let context = #context;

                match level {
                    tracing::Level::ERROR => tracing::error!(message = %message, context = %context),
                    tracing::Level::WARN => tracing::warn!(message = %message, context = %context),
                    tracing::Level::INFO => tracing::info!(message = %message, context = %context),
                    tracing::Level::DEBUG => tracing::debug!(message = %message, context = %context),
                    tracing::Level::TRACE => tracing::trace!(message = %message, context = %context),
                }
            }
        }
    } else {
        quote! {
            {
                let entry = &#entry_expr;
                let level = entry.level();
                let message = entry.to_string();

                match level {
                    tracing::Level::ERROR => tracing::error!("{}", message),
                    tracing::Level::WARN => tracing::warn!("{}", message),
                    tracing::Level::INFO => tracing::info!("{}", message),
                    tracing::Level::DEBUG => tracing::debug!("{}", message),
                    tracing::Level::TRACE => tracing::trace!("{}", message),
                }
            }
        }
    }
    .into()
}
