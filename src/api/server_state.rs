use crate::application::service::user_service::UserService;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServerState {
    pub user_service: Arc<dyn UserService>,
}

impl ServerState {
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        ServerState { user_service }
    }
}
