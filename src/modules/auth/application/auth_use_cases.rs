use std::sync::Arc;

use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
}
