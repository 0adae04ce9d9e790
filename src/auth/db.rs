//! User persistence: login-driven upsert and lookups.

use sqlx::SqlitePool;
use tracing::debug;

use super::models::{UpsertUser, User};
use crate::common::{now_timestamp, ApiError};

/// Insert-or-refresh a user keyed on the external login identifier.
///
/// Only supplied fields participate in the conflict update, so a login that
/// carries no profile data still refreshes `last_signed_in` without clobbering
/// anything. The configured owner open_id is promoted to admin unless the
/// caller picked a role explicitly; an absent role never overwrites a stored
/// one, so re-logins cannot downgrade an admin.
pub async fn upsert_user(
    pool: &SqlitePool,
    owner_open_id: Option<&str>,
    user: UpsertUser,
) -> Result<(), ApiError> {
    if user.open_id.trim().is_empty() {
        return Err(ApiError::ValidationError(
            "open_id is required for upsert".to_string(),
        ));
    }

    let role = user.role.clone().or_else(|| {
        if owner_open_id == Some(user.open_id.as_str()) {
            Some("admin".to_string())
        } else {
            None
        }
    });
    let last_signed_in = user.last_signed_in.clone().unwrap_or_else(now_timestamp);

    sqlx::query(
        r#"
        INSERT INTO users (open_id, name, email, login_method, role, last_signed_in)
        VALUES (?, ?, ?, ?, COALESCE(?, 'user'), ?)
        ON CONFLICT(open_id) DO UPDATE SET
            name = COALESCE(?, users.name),
            email = COALESCE(?, users.email),
            login_method = COALESCE(?, users.login_method),
            role = COALESCE(?, users.role),
            last_signed_in = ?,
            updated_at = datetime('now')
        "#,
    )
    .bind(&user.open_id)
    .bind(user.name.as_deref())
    .bind(user.email.as_deref())
    .bind(user.login_method.as_deref())
    .bind(role.as_deref())
    .bind(&last_signed_in)
    .bind(user.name.as_deref())
    .bind(user.email.as_deref())
    .bind(user.login_method.as_deref())
    .bind(role.as_deref())
    .bind(&last_signed_in)
    .execute(pool)
    .await
    .map_err(ApiError::DatabaseError)?;

    debug!(open_id = %user.open_id, "User upserted");

    Ok(())
}

pub async fn get_user_by_open_id(
    pool: &SqlitePool,
    open_id: &str,
) -> Result<Option<User>, ApiError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE open_id = ?")
        .bind(open_id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)
}

pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, ApiError> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(ApiError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::migrations::test_pool;

    fn login(open_id: &str, name: &str) -> UpsertUser {
        UpsertUser {
            open_id: open_id.to_string(),
            name: Some(name.to_string()),
            email: Some(format!("{}@example.com", name)),
            login_method: Some("google".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_upsert_rejects_empty_open_id() {
        let pool = test_pool().await;
        let err = upsert_user(&pool, None, UpsertUser::default()).await;
        assert!(matches!(err, Err(ApiError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_row_with_latest_name() {
        let pool = test_pool().await;

        upsert_user(&pool, None, login("oid-1", "first")).await.unwrap();
        upsert_user(&pool, None, login("oid-1", "second")).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);

        let user = get_user_by_open_id(&pool, "oid-1").await.unwrap().unwrap();
        assert_eq!(user.name.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_upsert_leaves_absent_fields_untouched() {
        let pool = test_pool().await;

        upsert_user(&pool, None, login("oid-1", "ana")).await.unwrap();
        upsert_user(
            &pool,
            None,
            UpsertUser {
                open_id: "oid-1".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let user = get_user_by_open_id(&pool, "oid-1").await.unwrap().unwrap();
        assert_eq!(user.name.as_deref(), Some("ana"));
        assert_eq!(user.email.as_deref(), Some("ana@example.com"));
    }

    #[tokio::test]
    async fn test_owner_open_id_is_granted_admin() {
        let pool = test_pool().await;

        upsert_user(&pool, Some("owner-oid"), login("owner-oid", "dona")).await.unwrap();
        upsert_user(&pool, Some("owner-oid"), login("regular-oid", "zé")).await.unwrap();

        let owner = get_user_by_open_id(&pool, "owner-oid").await.unwrap().unwrap();
        let regular = get_user_by_open_id(&pool, "regular-oid").await.unwrap().unwrap();
        assert_eq!(owner.role, "admin");
        assert_eq!(regular.role, "user");
    }

    #[tokio::test]
    async fn test_relogin_does_not_downgrade_admin() {
        let pool = test_pool().await;

        upsert_user(
            &pool,
            None,
            UpsertUser {
                open_id: "oid-1".to_string(),
                role: Some("admin".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        // A plain re-login carries no role
        upsert_user(&pool, None, login("oid-1", "still-admin")).await.unwrap();

        let user = get_user_by_open_id(&pool, "oid-1").await.unwrap().unwrap();
        assert_eq!(user.role, "admin");
    }

    #[tokio::test]
    async fn test_upsert_always_sets_last_signed_in() {
        let pool = test_pool().await;

        upsert_user(&pool, None, login("oid-1", "ana")).await.unwrap();
        let user = get_user_by_open_id(&pool, "oid-1").await.unwrap().unwrap();
        assert!(user.last_signed_in.is_some());
    }

    #[tokio::test]
    async fn test_get_user_miss_returns_none() {
        let pool = test_pool().await;
        assert!(get_user_by_open_id(&pool, "ghost").await.unwrap().is_none());
        assert!(get_user_by_id(&pool, 42).await.unwrap().is_none());
    }
}
