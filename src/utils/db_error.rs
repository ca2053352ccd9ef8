/// True when the error is SQLite's unique violation on `urls.short_code`,
/// i.e. the candidate code is already taken by a different URL.
///
/// SQLite reports the failing column in the message
/// (`UNIQUE constraint failed: urls.short_code`); there is no structured
/// constraint name as on Postgres.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && db_err.message().contains("urls.short_code")
}
