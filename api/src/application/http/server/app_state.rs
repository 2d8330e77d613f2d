use std::sync::Arc;
use std::time::Duration;

use mesero_core::application::MeseroService;

use crate::application::sessions::SessionRegistry;
use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MeseroService,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MeseroService) -> Self {
        let idle_ttl = Duration::from_secs(args.server.session_idle_ttl_secs);

        Self {
            args,
            service,
            sessions: SessionRegistry::new(idle_ttl),
        }
    }
}
