use sqlx::PgPool;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

pub mod chirp;
pub mod user;

use chirp::{ChirpController, DynChirpCtrl};
use user::{DynUserCtrl, UserController};

/// The persistence layer, split into one controller per table.
///
/// Handlers only see this through `DynStore`, so tests can swap in `MockStoreTrait`.
#[derive(Clone)]
pub struct Store {
    user: Arc<UserController>,
    chirp: Arc<ChirpController>,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        let user = Arc::new(UserController::new(pool.clone()));
        let chirp = Arc::new(ChirpController::new(pool));
        Self { user, chirp }
    }
}

pub type DynStore = Arc<dyn StoreTrait + Send + Sync>;

#[cfg_attr(test, automock)]
pub trait StoreTrait {
    fn user(&self) -> DynUserCtrl;
    fn chirp(&self) -> DynChirpCtrl;
}

impl StoreTrait for Store {
    fn user(&self) -> DynUserCtrl {
        self.user.clone()
    }

    fn chirp(&self) -> DynChirpCtrl {
        self.chirp.clone()
    }
}
