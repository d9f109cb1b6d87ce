//! Expense operations

use chrono::NaiveDate;
use rusqlite::{params, OptionalExtension};

use super::{date_column, parse_datetime, Database, DATE_FORMAT};
use crate::analytics::current_month_window;
use crate::error::{Error, Result};
use crate::models::{Expense, NewExpense};

const EXPENSE_COLUMNS: &str =
    "id, user_id, name, amount, category, date, notes, created_at, updated_at";

fn row_to_expense(row: &rusqlite::Row<'_>) -> rusqlite::Result<Expense> {
    let created_at_str: String = row.get(7)?;
    let updated_at_str: String = row.get(8)?;
    Ok(Expense {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        amount: row.get(3)?,
        category: row.get(4)?,
        date: date_column(row, 5)?,
        notes: row.get(6)?,
        created_at: parse_datetime(&created_at_str),
        updated_at: parse_datetime(&updated_at_str),
    })
}

/// Optional narrowing for expense listings
///
/// Blank values are treated as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExpenseFilter<'query> {
    /// Exact category, compared after lowercasing
    pub category: Option<&'query str>,
    /// Case-insensitive substring of the name or notes
    pub search: Option<&'query str>,
}

impl<'query> ExpenseFilter<'query> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Option<&'query str>) -> Self {
        self.category = category;
        self
    }

    pub fn search(mut self, search: Option<&'query str>) -> Self {
        self.search = search;
        self
    }
}

impl Database {
    /// Record an expense for a user
    ///
    /// `today` is used when the expense carries no date.
    pub fn create_expense(
        &self,
        user_id: i64,
        expense: &NewExpense,
        today: NaiveDate,
    ) -> Result<Expense> {
        expense.validate()?;

        if self.get_user(user_id)?.is_none() {
            return Err(Error::NotFound(format!(
                "User with ID {} not found",
                user_id
            )));
        }

        let date = expense.date.unwrap_or(today);
        let notes = expense
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let conn = self.conn()?;
        conn.execute(
            r#"
            INSERT INTO expenses (user_id, name, amount, category, date, notes)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            params![
                user_id,
                expense.name.trim(),
                expense.amount,
                expense.normalized_category(),
                date.format(DATE_FORMAT).to_string(),
                notes
            ],
        )?;
        let id = conn.last_insert_rowid();
        drop(conn);

        self.get_expense(id)?
            .ok_or_else(|| Error::NotFound(format!("Expense {} not found after creation", id)))
    }

    /// Get an expense by ID
    pub fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let conn = self.conn()?;
        let expense = conn
            .query_row(
                &format!("SELECT {} FROM expenses WHERE id = ?", EXPENSE_COLUMNS),
                params![id],
                row_to_expense,
            )
            .optional()?;

        Ok(expense)
    }

    /// List a user's expenses, newest first, narrowed by `filter`
    pub fn list_expenses(&self, user_id: i64, filter: &ExpenseFilter<'_>) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let category = filter
            .category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);
        let search = filter
            .search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {} FROM expenses
            WHERE user_id = ?1
              AND (?2 IS NULL OR category = ?2)
              AND (?3 IS NULL
                   OR instr(lower(name), ?3) > 0
                   OR instr(lower(COALESCE(notes, '')), ?3) > 0)
            ORDER BY date DESC, id DESC
            "#,
            EXPENSE_COLUMNS
        ))?;

        let expenses = stmt
            .query_map(params![user_id, category, search], row_to_expense)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// List a user's expenses dated within `[from, to]`, oldest first
    pub fn list_expenses_between(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            r#"
            SELECT {} FROM expenses
            WHERE user_id = ? AND date >= ? AND date <= ?
            ORDER BY date, id
            "#,
            EXPENSE_COLUMNS
        ))?;

        let expenses = stmt
            .query_map(
                params![
                    user_id,
                    from.format(DATE_FORMAT).to_string(),
                    to.format(DATE_FORMAT).to_string()
                ],
                row_to_expense,
            )?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(expenses)
    }

    /// Expenses from the first of `today`'s month through `today`
    pub fn list_expenses_for_month(&self, user_id: i64, today: NaiveDate) -> Result<Vec<Expense>> {
        let (from, to) = current_month_window(today);
        self.list_expenses_between(user_id, from, to)
    }

    /// Delete an expense; returns false if it did not exist
    pub fn delete_expense(&self, id: i64) -> Result<bool> {
        let conn = self.conn()?;
        let deleted = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        Ok(deleted > 0)
    }
}
