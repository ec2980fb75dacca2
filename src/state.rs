use std::sync::Arc;

use crate::config::Config;
use crate::forward::Forwarder;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub forwarder: Arc<dyn Forwarder>,
}
