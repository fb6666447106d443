use crate::{DbError, Result as DbErrorResult};

use planetary_core::{NewUser, User};

use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    user_id: i64,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        Self {
            user_id: r.user_id,
            first_name: r.first_name,
            last_name: r.last_name,
            email: r.email,
            password: r.password,
        }
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user and return it with its newly assigned id.
    ///
    /// A second user with the same email fails with `DbError::UniqueViolation`.
    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (first_name, last_name, email, password)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_insert(e, "users.email"))?;

        Ok(User::from_new(result.last_insert_rowid(), new_user.clone()))
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, first_name, last_name, email, password
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    /// Look up a user by exact email and password match
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, first_name, last_name, email, password
                FROM users
                WHERE email = ? AND password = ?
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
