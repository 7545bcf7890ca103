use std::sync::Arc;

use crate::config::Settings;
use crate::dispatch::WhatsAppClient;
use crate::notifier::CaseNotifier;
use crate::renderer::MessageRenderer;
use crate::template::{MemoryTemplateStore, TemplateStore};

/// Shared application state: every collaborator is constructed here and
/// passed explicitly, no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub template_store: Arc<dyn TemplateStore>,
    pub notifier: Arc<CaseNotifier>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let template_store: Arc<dyn TemplateStore> = Arc::new(MemoryTemplateStore::new());
        let renderer = MessageRenderer::new(template_store.clone());
        let client = WhatsAppClient::new(settings.whatsapp.clone(), renderer);
        let notifier = Arc::new(CaseNotifier::new(client));

        Self {
            settings: Arc::new(settings),
            template_store,
            notifier,
        }
    }
}
