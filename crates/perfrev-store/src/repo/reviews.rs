//! Review repository
//!
//! CRUD for the reviews table with an identity-map cache: repeated loads of
//! the same row hand back the same live instance, not a fresh copy.

use std::cell::RefCell;
use std::rc::Rc;

use perfrev_core::identity::{IdentityMap, SharedReview};
use perfrev_core::model::{EmployeeDirectory, Review};
use perfrev_core::{PerfRevError, Result};
use rusqlite::{Connection, OptionalExtension};

use crate::errors::from_rusqlite;

/// SQLite repository for reviews
///
/// Owns the identity map; construct one per application lifetime (or one
/// per test) and pass the connection into each operation explicitly.
#[derive(Debug, Default)]
pub struct ReviewRepo {
    cache: IdentityMap,
}

impl ReviewRepo {
    /// Create a repository with an empty identity map
    pub fn new() -> Self {
        Self {
            cache: IdentityMap::new(),
        }
    }

    /// Create the reviews table (idempotent)
    ///
    /// # Errors
    /// Returns a persistence error if the DDL fails.
    pub fn create_table(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY,
                year INTEGER,
                summary TEXT,
                employee_id INTEGER,
                FOREIGN KEY (employee_id) REFERENCES employees(id)
            )",
            [],
        )
        .map_err(from_rusqlite("create_reviews_table"))?;

        Ok(())
    }

    /// Drop the reviews table (idempotent)
    ///
    /// # Errors
    /// Returns a persistence error if the DDL fails.
    pub fn drop_table(conn: &Connection) -> Result<()> {
        conn.execute("DROP TABLE IF EXISTS reviews", [])
            .map_err(from_rusqlite("drop_reviews_table"))?;

        Ok(())
    }

    /// Validate, persist, and cache a new review in one step
    ///
    /// # Errors
    /// Fails with a validation error before touching the database, or a
    /// persistence error if the insert fails.
    pub fn create(
        &mut self,
        conn: &Connection,
        directory: &dyn EmployeeDirectory,
        year: i32,
        summary: &str,
        employee_id: i64,
    ) -> Result<SharedReview> {
        let review = Rc::new(RefCell::new(Review::new(
            year,
            summary,
            employee_id,
            directory,
        )?));
        self.save(conn, &review)?;

        Ok(review)
    }

    /// Persist a review: insert when it has no id, otherwise update
    ///
    /// On insert, the database-assigned primary key is written back to the
    /// instance and the instance is registered in the identity map.
    ///
    /// # Errors
    /// Returns a persistence error if the statement fails.
    pub fn save(&mut self, conn: &Connection, review: &SharedReview) -> Result<()> {
        if review.borrow().is_persisted() {
            return self.update(conn, review);
        }

        {
            let r = review.borrow();
            conn.execute(
                "INSERT INTO reviews (year, summary, employee_id) VALUES (?1, ?2, ?3)",
                rusqlite::params![r.year(), r.summary(), r.employee_id()],
            )
            .map_err(from_rusqlite("insert_review"))?;
        }

        let id = conn.last_insert_rowid();
        review.borrow_mut().id = Some(id);
        self.cache.insert(id, Rc::clone(review));
        tracing::debug!(review_id = id, "inserted review");

        Ok(())
    }

    /// Update the row matching the review's id, setting all three columns
    ///
    /// # Errors
    /// Fails with `ReviewNotPersisted` when the review has no id, or a
    /// persistence error if the statement fails.
    pub fn update(&self, conn: &Connection, review: &SharedReview) -> Result<()> {
        let r = review.borrow();
        let id = r.id.ok_or(PerfRevError::ReviewNotPersisted)?;

        conn.execute(
            "UPDATE reviews SET year = ?1, summary = ?2, employee_id = ?3 WHERE id = ?4",
            rusqlite::params![r.year(), r.summary(), r.employee_id(), id],
        )
        .map_err(from_rusqlite("update_review"))?;

        Ok(())
    }

    /// Delete the row for the review's id and forget the instance
    ///
    /// Removes the identity-map entry and clears the instance's id; the
    /// instance stays usable as an unpersisted review.
    ///
    /// # Errors
    /// Fails with `ReviewNotPersisted` when the review has no id, or a
    /// persistence error if the statement fails.
    pub fn delete(&mut self, conn: &Connection, review: &SharedReview) -> Result<()> {
        let id = review.borrow().id.ok_or(PerfRevError::ReviewNotPersisted)?;

        conn.execute("DELETE FROM reviews WHERE id = ?1", [id])
            .map_err(from_rusqlite("delete_review"))?;

        self.cache.remove(id);
        review.borrow_mut().id = None;
        tracing::debug!(review_id = id, "deleted review");

        Ok(())
    }

    /// Find a review by primary key
    ///
    /// Returns the cached instance when the key is already live; otherwise
    /// restores one from the row and caches it. An absent row is `Ok(None)`.
    ///
    /// # Errors
    /// Returns a persistence error if the query fails.
    pub fn find_by_id(&mut self, conn: &Connection, id: i64) -> Result<Option<SharedReview>> {
        let row = conn
            .query_row(
                "SELECT id, year, summary, employee_id FROM reviews WHERE id = ?1",
                [id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, i32>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, i64>(3)?,
                    ))
                },
            )
            .optional()
            .map_err(from_rusqlite("find_review"))?;

        match row {
            Some((id, year, summary, employee_id)) => Ok(Some(
                self.instance_from_row(id, year, summary, employee_id)?,
            )),
            None => Ok(None),
        }
    }

    /// Load every review, one instance per row, in natural row order
    ///
    /// # Errors
    /// Returns a persistence error if the query fails.
    pub fn get_all(&mut self, conn: &Connection) -> Result<Vec<SharedReview>> {
        let mut stmt = conn
            .prepare("SELECT id, year, summary, employee_id FROM reviews")
            .map_err(from_rusqlite("list_reviews"))?;

        let rows: Vec<(i64, i32, String, i64)> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .map_err(from_rusqlite("list_reviews"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite("list_reviews"))?;

        let mut reviews = Vec::with_capacity(rows.len());
        for (id, year, summary, employee_id) in rows {
            reviews.push(self.instance_from_row(id, year, summary, employee_id)?);
        }

        Ok(reviews)
    }

    /// Number of instances currently held by the identity map
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// Resolve a raw row through the identity map
    fn instance_from_row(
        &mut self,
        id: i64,
        year: i32,
        summary: String,
        employee_id: i64,
    ) -> Result<SharedReview> {
        if let Some(existing) = self.cache.get(id) {
            return Ok(existing);
        }

        let review = Rc::new(RefCell::new(Review::restore(
            id,
            year,
            summary,
            employee_id,
        )?));
        self.cache.insert(id, Rc::clone(&review));

        Ok(review)
    }
}
