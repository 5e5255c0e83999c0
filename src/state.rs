use std::sync::Arc;

use crate::gateway::CompletionGateway;

// app's shared state, immutable once the server starts
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<CompletionGateway>,
}

impl AppState {
    pub fn new(gateway: CompletionGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
        }
    }
}
