use diesel::prelude::*;

use crate::error::ChargeError;
use crate::models::app_state::DbPool;
use crate::models::entities::User;
use crate::schema::users;

/// Read-only view of the user store. The workflow never writes to it.
pub trait UserDirectory: Send + Sync {
    /// Exact-id lookup. `Ok(None)` is a reportable condition at every call
    /// site, never silently defaulted.
    fn find_by_id(&self, user_id: i64) -> Result<Option<User>, ChargeError>;

    /// Substring match against name or phone, store collation rules. Result
    /// order is whatever the store returns.
    fn search(&self, fragment: &str) -> Result<Vec<User>, ChargeError>;
}

pub struct DbUserDirectory {
    pool: DbPool,
}

impl DbUserDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl UserDirectory for DbUserDirectory {
    fn find_by_id(&self, user_id: i64) -> Result<Option<User>, ChargeError> {
        let mut conn = self.pool.get()?;
        users::table
            .find(user_id)
            .first::<User>(&mut conn)
            .optional()
            .map_err(ChargeError::from)
    }

    fn search(&self, fragment: &str) -> Result<Vec<User>, ChargeError> {
        let mut conn = self.pool.get()?;
        let pattern = format!("%{}%", fragment);
        users::table
            .filter(
                users::name
                    .like(pattern.as_str())
                    .or(users::phone.like(pattern.as_str())),
            )
            .load::<User>(&mut conn)
            .map_err(ChargeError::from)
    }
}
