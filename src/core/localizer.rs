use crate::interface::text_lookup::TextLookup;
use crate::model::error::system::SystemError;
use crate::model::locale::Locale;
use crate::model::log::system::SystemLog;
use crate::model::message_key::MessageKey;
use crate::utils::assets::Assets;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use macros::log;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// Fluent bundles for every supported locale, loaded once at startup.
pub struct Localizer {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl Localizer {
    pub fn load() -> Result<Self, SystemError> {
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let name = format!("locales/{}.ftl", locale.code());
            let source = Assets::load_text(&name).ok_or_else(|| SystemError::CatalogMissing {
                code: locale.code().to_string(),
            })?;
            sources.push((locale, source.into_owned()));
        }
        Self::from_sources(sources.iter().map(|(locale, source)| (*locale, source.as_str())))
    }

    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> Result<Self, SystemError> {
        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            bundles.insert(locale, Self::build_bundle(locale, source)?);
        }

        if !bundles.contains_key(&Locale::FALLBACK) {
            return Err(SystemError::CatalogMissing {
                code: Locale::FALLBACK.code().to_string(),
            });
        }

        let localizer = Self { bundles };
        localizer.validate();
        Ok(localizer)
    }

    fn build_bundle(
        locale: Locale,
        source: &str,
    ) -> Result<FluentBundle<FluentResource>, SystemError> {
        let invalid = || SystemError::InvalidCatalog {
            code: locale.code().to_string(),
        };

        let language = locale
            .code()
            .replace('_', "-")
            .parse::<LanguageIdentifier>()
            .map_err(|_| invalid())?;
        let resource = FluentResource::try_new(source.to_string()).map_err(|_| invalid())?;

        let mut bundle = FluentBundle::new_concurrent(vec![language]);
        // Paths are shown verbatim, without Unicode isolation marks around them
        bundle.set_use_isolating(false);
        bundle.add_resource(resource).map_err(|_| invalid())?;
        Ok(bundle)
    }

    fn validate(&self) {
        for locale in Locale::ALL {
            for key in self.missing_keys(locale) {
                log!(SystemLog::CatalogKeyMissing {
                    code: locale.code().to_string(),
                    key: key.as_str().to_string(),
                });
            }
        }
    }

    pub fn missing_keys(&self, locale: Locale) -> Vec<MessageKey> {
        let bundle = self.bundles.get(&locale);
        MessageKey::ALL
            .into_iter()
            .filter(|key| bundle.is_none_or(|bundle| !bundle.has_message(key.as_str())))
            .collect()
    }

    pub fn lookup(&self, locale: Locale) -> LocalizedText<'_> {
        LocalizedText {
            localizer: self,
            locale,
        }
    }

    /// Formats `key` in `locale`, then in the fallback locale. `None` when
    /// neither catalog defines it.
    fn format(&self, locale: Locale, key: MessageKey, args: Option<&FluentArgs>) -> Option<String> {
        [locale, Locale::FALLBACK].into_iter().find_map(|locale| {
            let bundle = self.bundles.get(&locale)?;
            let pattern = bundle.get_message(key.as_str())?.value()?;

            let mut errors = Vec::new();
            let text = bundle.format_pattern(pattern, args, &mut errors);
            for error in errors {
                log!(SystemLog::MessageFormatFailed {
                    key: key.as_str().to_string(),
                    reason: error.to_string(),
                });
            }
            Some(text.into_owned())
        })
    }
}

/// A [`Localizer`] bound to one locale.
#[derive(Clone, Copy)]
pub struct LocalizedText<'a> {
    localizer: &'a Localizer,
    locale: Locale,
}

impl TextLookup for LocalizedText<'_> {
    fn format(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let args = (!args.is_empty()).then(|| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        self.localizer
            .format(self.locale, key, args.as_ref())
            .unwrap_or_else(|| key.as_str().to_string())
    }
}
