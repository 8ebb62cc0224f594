use crate::core::app_config::AppConfig;
use crate::core::comparator::DirectoryComparator;
use crate::core::localizer::Localizer;
use crate::interface::text_lookup::TextLookup;
use crate::model::error::Error;
use crate::model::error::misc::MiscError;
use crate::model::message_key::MessageKey;
use crate::ui::main_page::MainPage;
use crate::utils::assets::Assets;
use crate::utils::font;
use eframe::egui;
use std::sync::Arc;
use tokio::runtime::Handle;

pub struct GuiManager {
    app_config: Arc<AppConfig>,
    localizer: Arc<Localizer>,
}

impl GuiManager {
    pub fn new(app_config: Arc<AppConfig>, localizer: Arc<Localizer>) -> Self {
        Self {
            app_config,
            localizer,
        }
    }

    /// Blocks until the window is closed. Must be called from within the tokio runtime.
    pub fn start(&self) -> Result<(), Error> {
        let locale = self.app_config.locale();
        let comparator = Arc::new(DirectoryComparator::from_config(&self.app_config));
        let main_page = MainPage::new(
            self.localizer.clone(),
            locale,
            comparator,
            Handle::current(),
        );

        let title = self.localizer.lookup(locale).text(MessageKey::AppTitle);
        let icon_data = Assets::load_app_icon()?;
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 260.0])
                .with_min_inner_size([480.0, 220.0])
                .with_title(title)
                .with_icon(icon_data),
            ..Default::default()
        };

        eframe::run_native(
            "FolderComparator",
            options,
            Box::new(|cc| {
                font::setup_system_fonts(&cc.egui_ctx);
                Ok(Box::new(main_page))
            }),
        )
        .map_err(|err| MiscError::UIPlatformError {
            message: err.to_string(),
        })?;

        Ok(())
    }
}
