//! Application state shared with every request handler.

use std::sync::Arc;

use ion_fire_control::AttackOrchestrator;

/// Handler state. Cheap to clone; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<AttackOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: AttackOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ion_fire_control::ResourceRegistry;

    #[test]
    fn test_app_state_clones_share_scheduler() {
        let state = AppState::new(AttackOrchestrator::simulated(ResourceRegistry::default(), 1));
        let other = state.clone();
        assert!(Arc::ptr_eq(
            state.orchestrator.scheduler(),
            other.orchestrator.scheduler()
        ));
        assert_eq!(state.orchestrator.scheduler().snapshot().len(), 3);
    }
}
