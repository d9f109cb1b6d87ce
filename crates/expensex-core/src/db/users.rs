//! User operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::{BudgetUpdate, NewUser, User};

const USER_COLUMNS: &str = "id, name, email, budget, savings_goal, created_at";

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let created_at_str: String = row.get(5)?;
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        budget: row.get(3)?,
        savings_goal: row.get(4)?,
        created_at: parse_datetime(&created_at_str),
    })
}

impl Database {
    /// Create a user; fails with `Conflict` if the email is taken
    pub fn create_user(&self, user: &NewUser) -> Result<User> {
        user.validate()?;
        let conn = self.conn()?;

        // Duplicate emails surface as a unique index violation
        conn.execute(
            "INSERT INTO users (name, email, budget, savings_goal) VALUES (?, ?, ?, ?)",
            params![user.name.trim(), user.email, user.budget, user.savings_goal],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Error::Conflict(format!("A user with email {} already exists", user.email))
            }
            other => Error::Database(other),
        })?;
        let id = conn.last_insert_rowid();
        drop(conn);

        self.get_user(id)?
            .ok_or_else(|| Error::NotFound(format!("User {} not found after creation", id)))
    }

    /// Get a user by ID
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS),
                params![id],
                row_to_user,
            )
            .optional()?;

        Ok(user)
    }

    /// Get a user by email
    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                &format!("SELECT {} FROM users WHERE email = ?", USER_COLUMNS),
                params![email],
                row_to_user,
            )
            .optional()?;

        Ok(user)
    }

    /// List all users
    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))?;

        let users = stmt
            .query_map([], row_to_user)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(users)
    }

    /// Update a user's budget and savings goal
    pub fn update_budget(&self, id: i64, update: &BudgetUpdate) -> Result<User> {
        update.validate()?;
        let conn = self.conn()?;

        let changed = conn.execute(
            "UPDATE users SET budget = ?, savings_goal = ? WHERE id = ?",
            params![update.budget, update.savings_goal, id],
        )?;
        drop(conn);

        if changed == 0 {
            return Err(Error::NotFound(format!("User with ID {} not found", id)));
        }

        self.get_user(id)?
            .ok_or_else(|| Error::NotFound(format!("User with ID {} not found", id)))
    }

    /// Delete a user and all of their expenses
    ///
    /// Returns false if the user did not exist.
    pub fn delete_user(&self, id: i64) -> Result<bool> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM expenses WHERE user_id = ?", params![id])?;
        let deleted = tx.execute("DELETE FROM users WHERE id = ?", params![id])?;

        tx.commit()?;
        Ok(deleted > 0)
    }
}
