use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::reading_list::{ListCategory, ReadingList};
use crate::domain::repositories::errors::{RepositoryError, RepositoryResult};
use crate::domain::repositories::reading_list_repository::ReadingListRepository;

/// PostgreSQL implementation of ReadingListRepository
///
/// Each category is a `TEXT[]` column, so element order is preserved
/// exactly as the aggregate holds it.
pub struct PostgresReadingListRepository {
    pool: PgPool,
}

impl PostgresReadingListRepository {
    /// Creates a new PostgresReadingListRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ReadingListRow {
    user_id: Uuid,
    read: Vec<String>,
    unread: Vec<String>,
    purchased: Vec<String>,
    dropped: Vec<String>,
}

impl From<ReadingListRow> for ReadingList {
    fn from(row: ReadingListRow) -> Self {
        ReadingList::from_persistence(row.user_id, row.read, row.unread, row.purchased, row.dropped)
    }
}

#[async_trait]
impl ReadingListRepository for PostgresReadingListRepository {
    async fn find_by_user(&self, user_id: Uuid) -> RepositoryResult<Option<ReadingList>> {
        let row = sqlx::query_as::<_, ReadingListRow>(
            r#"
            SELECT user_id, read, unread, purchased, dropped
            FROM reading_lists
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ReadingList::from))
    }

    async fn get_or_create(&self, user_id: Uuid) -> RepositoryResult<ReadingList> {
        sqlx::query(
            r#"
            INSERT INTO reading_lists (user_id)
            VALUES ($1)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                RepositoryError::UnknownUser(user_id)
            }
            other => RepositoryError::Database(other),
        })?;

        let row = sqlx::query_as::<_, ReadingListRow>(
            r#"
            SELECT user_id, read, unread, purchased, dropped
            FROM reading_lists
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn save_fields(&self, list: &ReadingList, fields: &[ListCategory]) -> RepositoryResult<()> {
        let mut columns: Vec<ListCategory> = Vec::with_capacity(fields.len());
        for field in fields {
            if !columns.contains(field) {
                columns.push(*field);
            }
        }
        if columns.is_empty() {
            return Ok(());
        }

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE reading_lists SET ");
        let mut assignments = builder.separated(", ");
        for column in &columns {
            // Column names come from a closed enum, never from input
            assignments.push(format!("{} = ", column.column()));
            assignments.push_bind_unseparated(list.books(*column).to_vec());
        }
        assignments.push("updated_at = NOW()");
        builder.push(" WHERE user_id = ");
        builder.push_bind(list.user_id());

        builder.build().execute(&self.pool).await?;

        tracing::debug!(user_id = %list.user_id(), ?columns, "Saved reading list fields");

        Ok(())
    }
}
