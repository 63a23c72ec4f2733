use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::connection::DbConnection;
use crate::db::schema::users;
use crate::error::DbResult;
use crate::model::user::{NewUser, User};

/// ## Summary
/// Inserts one user row and returns the stored record.
///
/// ## Errors
/// Returns an error if the insert is rejected, e.g. on a duplicate email.
pub async fn insert_user(conn: &mut DbConnection<'_>, new_user: &NewUser) -> DbResult<User> {
    let user = diesel::insert_into(users::table)
        .values(new_user)
        .returning(User::as_returning())
        .get_result(conn)
        .await?;

    Ok(user)
}

/// ## Summary
/// Loads all users in insertion order.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn all_users(conn: &mut DbConnection<'_>) -> DbResult<Vec<User>> {
    let users = users::table
        .select(User::as_select())
        .order(users::created_at.asc())
        .load(conn)
        .await?;

    Ok(users)
}

/// ## Summary
/// Counts the user rows in the store.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn count_users(conn: &mut DbConnection<'_>) -> DbResult<i64> {
    let count = users::table.count().get_result(conn).await?;

    Ok(count)
}
