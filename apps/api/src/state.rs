use std::sync::Arc;

use crate::company::resolver::CompanyResolver;
use crate::company::store::CompanyStore;
use crate::config::Config;
use crate::leads::webhook::LeadWebhook;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<CompanyResolver>,
    /// Same store the resolver writes through; read directly by the listing views.
    pub store: Arc<dyn CompanyStore>,
    pub leads: LeadWebhook,
    pub config: Config,
}
