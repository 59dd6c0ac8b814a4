use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::FieldPrompter;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub prompter: Arc<dyn FieldPrompter>,
}

impl AppContext {
    pub fn new(config: AppConfig, prompter: Arc<dyn FieldPrompter>) -> Self {
        Self { config, prompter }
    }
}
