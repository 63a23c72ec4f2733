use std::path::Path;
use std::sync::Arc;

use salvo::async_trait;

use crate::error::AppResult;
use simple_admin_core::config::Settings;
use simple_admin_core::error::CoreError;
use simple_admin_service::views::{ViewConfig, ViewRegistry};

/// Directory of templates bundled with this crate; the fallback when the
/// application supplies no override directory.
pub const BUNDLED_VIEWS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/views");

/// ## Summary
/// Boots the view registry for the configured application base path against
/// the bundled templates.
///
/// ## Errors
/// Returns an error if the resolved template directory cannot be loaded.
pub fn boot_views(settings: &Settings) -> AppResult<ViewRegistry> {
    let config = ViewConfig::new(settings.views.base_path.clone());

    Ok(ViewRegistry::boot(&config, Path::new(BUNDLED_VIEWS_DIR))?)
}

pub struct ViewRegistryHandler {
    pub registry: Arc<ViewRegistry>,
}

#[async_trait]
impl salvo::Handler for ViewRegistryHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(self.registry.clone());
    }
}

/// ## Summary
/// Retrieves the view registry from the depot.
///
/// ## Errors
/// Returns an error if the view registry is not found in the depot.
pub fn get_views_from_depot(depot: &salvo::Depot) -> AppResult<Arc<ViewRegistry>> {
    depot
        .obtain::<Arc<ViewRegistry>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("View registry not found in depot").into())
}
