use chrono::Local;

use super::state::AppState;
use super::AgendaApp;
use crate::services::appointment::AppointmentBook;
use crate::services::client::ClientDirectory;
use crate::services::clinic::ClinicDirectory;
use crate::services::storage::ActiveClinicStore;
use crate::services::template::TemplateService;
use crate::services::timegrid;
use crate::ui::theme::AgendaTheme;

impl AgendaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let store = match ActiveClinicStore::at_default_location() {
            Ok(store) => {
                log::info!("Active clinic stored at {}", store.path().display());
                Some(store)
            }
            Err(err) => {
                log::warn!("Running without persistence: {:#}", err);
                None
            }
        };

        let directory = ClinicDirectory::load_or_default(store);
        log::info!(
            "Loaded clinic '{}' with {} cabins",
            directory.active_clinic().name,
            directory.active_config().cabins.len()
        );

        let active_theme = AgendaTheme::from_system();
        active_theme.apply_to_context(&cc.egui_ctx);

        // Land the first frame with "now" in view
        let config = directory.active_config();
        let pending_scroll = timegrid::scroll_target(
            Local::now().time(),
            &config.open_time,
            &config.close_time,
        );

        Self {
            directory,
            book: AppointmentBook::seed(),
            clients: ClientDirectory::seed(),
            templates: TemplateService::builtin(),
            active_theme,
            state: AppState::new(Local::now().date_naive(), pending_scroll),
        }
    }
}
