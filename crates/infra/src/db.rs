/// Shared connection pool handle used by every repository.
pub type Db = sqlx::PgPool;
