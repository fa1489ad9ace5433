use std::sync::Arc;

use crate::accounts::AccountService;
use crate::config::Config;
use crate::db::users::PgUserStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub accounts: AccountService<PgUserStore>,
    pub config: Config,
}
