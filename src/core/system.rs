use crate::core::app_config::AppConfig;
use crate::core::gui_manager::GuiManager;
use crate::core::localizer::Localizer;
use crate::model::error::Error;
use crate::model::log::system::SystemLog;
use crate::utils::logging::Logging;
use macros::log;
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub struct System {
    app_config: Arc<AppConfig>,
    localizer: Arc<Localizer>,
    log_guard: WorkerGuard,
}

impl System {
    pub fn initialize() -> Result<Self, Error> {
        let app_config = AppConfig::new()?;
        let log_guard = Logging::initialize(&app_config.log_level, &app_config.log_directory)?;
        log!(SystemLog::Initializing);
        app_config.log_notices();
        let localizer = Localizer::load()?;
        log!(SystemLog::InitializeComplete);
        Ok(Self {
            app_config: Arc::new(app_config),
            localizer: Arc::new(localizer),
            log_guard,
        })
    }

    pub fn run(&self) -> Result<(), Error> {
        log!(SystemLog::Online);
        let gui_manager = GuiManager::new(self.app_config.clone(), self.localizer.clone());
        gui_manager.start()?;
        log!(SystemLog::GuiExited);
        Ok(())
    }

    pub fn terminate(self) {
        log!(SystemLog::Terminating);
        log!(SystemLog::TerminateComplete);
        // Flushes the file writer
        drop(self.log_guard);
    }
}
