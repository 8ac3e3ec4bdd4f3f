#![forbid(unsafe_code)]

use super::{ColumnWidthRow, SqliteStore, StoreError};
use cw_core::ColumnWidths;
use cw_core::ids::{OwnerId, ViewKey};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, warn};

impl SqliteStore {
    /// Never fails on a missing row or an unreadable payload: both read as `{}`.
    pub fn column_widths_get(
        &self,
        owner: &OwnerId,
        view_key: &ViewKey,
    ) -> Result<ColumnWidths, StoreError> {
        let raw = self
            .conn
            .query_row(
                "SELECT widths_json FROM column_widths WHERE owner=?1 AND view_key=?2",
                params![owner.as_str(), view_key.as_str()],
                |row| row.get::<_, Option<String>>(0),
            )
            .optional()?;

        let Some(Some(raw)) = raw else {
            return Ok(ColumnWidths::new());
        };

        match ColumnWidths::decode(&raw) {
            Ok(widths) => Ok(widths),
            Err(err) => {
                warn!(
                    owner = %owner,
                    view_key = %view_key,
                    error = %err,
                    "unreadable column widths payload, serving empty widths"
                );
                Ok(ColumnWidths::new())
            }
        }
    }

    /// Replaces the stored mapping for `(owner, view_key)`, creating the row on first write.
    pub fn column_widths_set(
        &mut self,
        owner: &OwnerId,
        view_key: &ViewKey,
        widths: &ColumnWidths,
    ) -> Result<(), StoreError> {
        let widths_json = widths.encode();
        let now_ms = super::now_ms();

        match upsert_tx(&mut self.conn, owner, view_key, &widths_json, now_ms) {
            Ok(()) => {}
            Err(err) if super::is_constraint_violation(&err) => {
                warn!(
                    owner = %owner,
                    view_key = %view_key,
                    error = %err,
                    "column widths upsert hit a constraint, retrying as update"
                );
                let updated = match update_tx(&mut self.conn, owner, view_key, &widths_json, now_ms) {
                    Ok(updated) => updated,
                    Err(err) if super::is_constraint_violation(&err) => 0,
                    Err(err) => return Err(err.into()),
                };
                if updated == 0 {
                    return Err(StoreError::Conflict {
                        owner: owner.as_str().to_string(),
                        view_key: view_key.as_str().to_string(),
                    });
                }
            }
            Err(err) => return Err(err.into()),
        }

        debug!(
            owner = %owner,
            view_key = %view_key,
            columns = widths.len(),
            "column widths saved"
        );
        Ok(())
    }

    pub fn column_widths_row(
        &self,
        owner: &OwnerId,
        view_key: &ViewKey,
    ) -> Result<Option<ColumnWidthRow>, StoreError> {
        Ok(self
            .conn
            .query_row(
                r#"
                SELECT owner, view_key, widths_json, created_at_ms, updated_at_ms
                FROM column_widths
                WHERE owner=?1 AND view_key=?2
                "#,
                params![owner.as_str(), view_key.as_str()],
                map_row,
            )
            .optional()?)
    }

    pub fn column_widths_list(
        &self,
        owner: &OwnerId,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<ColumnWidthRow>, StoreError> {
        let limit = super::to_sqlite_i64(limit)?;
        let offset = super::to_sqlite_i64(offset)?;

        let mut stmt = self.conn.prepare(
            r#"
            SELECT owner, view_key, widths_json, created_at_ms, updated_at_ms
            FROM column_widths
            WHERE owner=?1
            ORDER BY view_key ASC
            LIMIT ?2 OFFSET ?3
            "#,
        )?;
        let rows = stmt.query_map(params![owner.as_str(), limit, offset], map_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }
}

fn upsert_tx(
    conn: &mut Connection,
    owner: &OwnerId,
    view_key: &ViewKey,
    widths_json: &str,
    now_ms: i64,
) -> Result<(), rusqlite::Error> {
    let tx = conn.transaction()?;
    super::ensure_owner_tx(&tx, owner, now_ms)?;
    // An identical payload leaves the row untouched, timestamps included.
    tx.execute(
        r#"
        INSERT INTO column_widths(owner, view_key, widths_json, created_at_ms, updated_at_ms)
        VALUES (?1, ?2, ?3, ?4, ?4)
        ON CONFLICT(owner, view_key) DO UPDATE SET
          widths_json=excluded.widths_json,
          updated_at_ms=excluded.updated_at_ms
        WHERE column_widths.widths_json IS NOT excluded.widths_json
        "#,
        params![owner.as_str(), view_key.as_str(), widths_json, now_ms],
    )?;
    tx.commit()
}

fn update_tx(
    conn: &mut Connection,
    owner: &OwnerId,
    view_key: &ViewKey,
    widths_json: &str,
    now_ms: i64,
) -> Result<usize, rusqlite::Error> {
    let tx = conn.transaction()?;
    let updated = tx.execute(
        "UPDATE column_widths SET widths_json=?3, updated_at_ms=?4 WHERE owner=?1 AND view_key=?2",
        params![owner.as_str(), view_key.as_str(), widths_json, now_ms],
    )?;
    tx.commit()?;
    Ok(updated)
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ColumnWidthRow> {
    Ok(ColumnWidthRow {
        owner: row.get(0)?,
        view_key: row.get(1)?,
        widths_json: row.get(2)?,
        created_at_ms: row.get(3)?,
        updated_at_ms: row.get(4)?,
    })
}
