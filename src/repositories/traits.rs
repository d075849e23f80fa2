//! Common repository traits
//!
//! Generic interfaces for database operations, implemented by every repository
//! that owns a table.

/// Trait for inserting new rows
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the database)
/// * `CreateDTO` - DTO for creation (without ID, generated by SQLite)
pub trait Create<Entity, CreateDTO> {
    /// # Returns
    /// * `Ok(Entity)` - The stored row, read back with `RETURNING`
    /// * `Err(sqlx::Error)` - Insert failed (a unique-constraint violation included)
    async fn create(&self, data: &CreateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for reading a single row by primary key
pub trait Read<Entity, Id> {
    /// * `Ok(None)` - No row with that ID
    async fn read(&self, id: &Id) -> Result<Option<Entity>, sqlx::Error>;
}

/// Trait for reading multiple rows by a list of primary keys
pub trait ReadMany<Entity, Id> {
    /// Rows are returned in table order, which may not match the order of `ids`.
    /// An empty slice yields an empty vec without touching the database.
    async fn read_many(&self, ids: &[Id]) -> Result<Vec<Entity>, sqlx::Error>;
}

/// Trait for updating existing rows
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - Data to write
/// * `Id` - Type of the key used to locate the row
pub trait Update<Entity, UpdateDTO, Id> {
    /// * `Err(sqlx::Error::RowNotFound)` - Nothing matched `id`
    async fn update(&self, id: &Id, data: &UpdateDTO) -> Result<Entity, sqlx::Error>;
}

/// Trait for deleting rows
pub trait Delete<Id> {
    /// # Returns
    /// * `Ok(true)` - A row was deleted
    /// * `Ok(false)` - Nothing matched `id`
    async fn delete(&self, id: &Id) -> Result<bool, sqlx::Error>;
}
