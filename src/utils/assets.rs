use crate::model::error::Error;
use crate::model::error::misc::MiscError;
use eframe::egui::IconData;
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

impl Assets {
    pub fn load_app_icon() -> Result<IconData, Error> {
        let icon_bytes = Assets::get("icon.png").ok_or(MiscError::AssetFileNotFound {
            name: "icon.png".to_string(),
        })?;

        let image = image::load_from_memory(&icon_bytes.data)
            .map_err(|_| MiscError::DeserializeError {
                name: "icon.png".to_string(),
            })?
            .to_rgba8();

        let (width, height) = image.dimensions();
        let rgba = image.into_raw();

        Ok(IconData {
            rgba,
            width,
            height,
        })
    }

    pub fn load_text(name: &str) -> Option<Cow<'static, str>> {
        let file = Assets::get(name)?;
        match file.data {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Cow::Owned(bytes) => String::from_utf8(bytes).ok().map(Cow::Owned),
        }
    }
}
