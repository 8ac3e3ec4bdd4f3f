#![forbid(unsafe_code)]

use super::{SqliteStore, StoreError};
use cw_core::ids::OwnerId;
use rusqlite::params;

impl SqliteStore {
    /// Removes the owner and, by cascade, every preference row they hold.
    pub fn owner_delete(&mut self, owner: &OwnerId) -> Result<bool, StoreError> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute("DELETE FROM owners WHERE owner=?1", params![owner.as_str()])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    pub fn owner_exists(&self, owner: &OwnerId) -> Result<bool, StoreError> {
        let count = self.conn.query_row(
            "SELECT COUNT(1) FROM owners WHERE owner=?1",
            params![owner.as_str()],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(count > 0)
    }
}
