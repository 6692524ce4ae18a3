//! Schema initialization.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Creates missing tables and indexes from the embedded schema.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;
        debug!("Database schema ready");
        Ok(())
    }
}
