//! Builds the order form controller from resolved paths and configuration.

use std::sync::Arc;

use anyhow::{Context, Result};

use rusikaram_application::{
    LinkOpener, NotificationService, OrderFormController, PrintLinkOpener, SystemClock,
    SystemLinkOpener,
};
use rusikaram_core::config::AppConfig;
use rusikaram_infrastructure::{JsonFileStore, KeyValueOrderRepository, RusikaramPaths};

pub fn build_controller(paths: &RusikaramPaths, config: &AppConfig) -> Result<OrderFormController> {
    let store_file = paths.store_file();
    let store = JsonFileStore::open(store_file.clone())
        .with_context(|| format!("Failed to open order store at {}", store_file.display()))?;
    let repository = Arc::new(KeyValueOrderRepository::new(Arc::new(store)));

    let opener: Arc<dyn LinkOpener> = if config.notification.open_links {
        Arc::new(SystemLinkOpener)
    } else {
        Arc::new(PrintLinkOpener)
    };

    Ok(OrderFormController::open(
        repository,
        Arc::new(SystemClock),
        NotificationService::new(opener),
    ))
}
