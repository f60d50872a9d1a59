//! Booking Repository
//!
//! Bookings are written by the customer-facing flow; this server only
//! reads them.

use super::RepoResult;
use shared::models::BookingWithStore;

/// List a staff member's bookings joined with the store name/address
pub async fn find_for_user_with_store(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    user_id: i64,
) -> RepoResult<Vec<BookingWithStore>> {
    let bookings = sqlx::query_as::<_, BookingWithStore>(
        "SELECT b.id, b.day, b.time, b.status, si.name AS store_name, si.address AS store_address \
         FROM booking b \
         JOIN staff u ON u.id = b.user_id \
         JOIN store_information si ON si.id = u.store_id \
         WHERE b.user_id = ? \
         ORDER BY b.day, b.time",
    )
    .bind(user_id)
    .fetch_all(ex)
    .await?;
    Ok(bookings)
}
