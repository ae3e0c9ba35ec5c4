use std::sync::Arc;

use crate::{config::Config, services::ModelService};

#[derive(Clone)]
pub struct AppState {
    pub model_service: Arc<ModelService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model_service = Arc::new(ModelService::from_config(&config));

        if model_service.is_configured() {
            log::info!("inference backend configured, model {}", config.chat_model);
        } else {
            log::warn!("no inference backend configured, serving heuristic fallbacks only");
        }

        Self {
            model_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_from_test_config_has_no_backend() {
        let state = AppState::new(Config::test_config());

        assert!(!state.model_service.is_configured());
    }
}
