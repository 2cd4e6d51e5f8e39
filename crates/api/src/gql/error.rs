/// Error type for GraphQL resolvers.
///
/// async-graphql converts anything implementing `Display` via `?`, so this
/// enum only decides what the client gets to see:
///   - `Sqlx` logs the database detail and shows a generic message
///   - `Uuid` shows "Invalid ID: …"
///   - `NotFound` shows "<Entity> not found"
///   - `Validation` is shown verbatim
#[derive(Debug)]
pub enum GqlError {
    Sqlx(sqlx::Error),
    Uuid(uuid::Error),
    NotFound(&'static str),
    Validation(String),
}

impl GqlError {
    pub fn validation(msg: impl Into<String>) -> Self {
        GqlError::Validation(msg.into())
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Sqlx(e) => {
                tracing::error!("Database error: {e}");
                write!(f, "Internal database error")
            }
            GqlError::Uuid(e) => write!(f, "Invalid ID: {e}"),
            GqlError::NotFound(entity) => write!(f, "{entity} not found"),
            GqlError::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<sqlx::Error> for GqlError {
    fn from(e: sqlx::Error) -> Self {
        GqlError::Sqlx(e)
    }
}

impl From<uuid::Error> for GqlError {
    fn from(e: uuid::Error) -> Self {
        GqlError::Uuid(e)
    }
}

/// Converts any `Result<T, E: Display>` into `async_graphql::Result<T>` with a
/// context prefix.
///
/// Usage: `Uuid::parse_str(id).gql_err("Invalid tournament ID")?`
pub trait ResultExt<T> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn gql_err(self, context: &str) -> std::result::Result<T, async_graphql::Error> {
        self.map_err(|e| async_graphql::Error::new(format!("{context}: {e}")))
    }
}

/// Route sqlx failures through `GqlError` so clients never see raw SQL errors.
pub trait DbResultExt<T> {
    fn db(self) -> std::result::Result<T, GqlError>;
}

impl<T> DbResultExt<T> for std::result::Result<T, sqlx::Error> {
    fn db(self) -> std::result::Result<T, GqlError> {
        self.map_err(GqlError::from)
    }
}
