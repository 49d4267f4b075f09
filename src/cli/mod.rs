//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod schedule;
pub mod venue;

pub use budget::{handle_budget_command, BudgetArgs, BudgetCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use schedule::{handle_schedule_command, ScheduleCommands};
pub use venue::{handle_venue_command, VenueCommands};

use std::sync::Arc;

use crate::config::{PlannerPaths, Settings};
use crate::error::PlannerResult;
use crate::i18n::Catalog;
use crate::storage::{open_json_store, DocumentStore};

/// Everything a command handler needs
pub struct PlannerContext {
    pub paths: PlannerPaths,
    pub settings: Settings,
    pub catalog: Catalog,
    pub store: Arc<dyn DocumentStore>,
}

impl PlannerContext {
    /// Load settings and open the on-disk store
    pub fn open(paths: PlannerPaths) -> PlannerResult<Self> {
        let settings = Settings::load_or_create(&paths)?;
        let catalog = Catalog::for_locale(settings.locale.as_deref());
        let store = Arc::new(open_json_store(&paths)?);

        Ok(Self {
            paths,
            settings,
            catalog,
            store,
        })
    }
}
