use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::{AuthUser, MaybeAuthUser};
use crate::api::state::AppState;
use crate::domain::reading_list::{BooksView, ListAction, ListCategory, ReadingList};
use crate::domain::repositories::{ReadingListRepository, RepositoryError, UserRepository};
use crate::infrastructure::repositories::{PostgresReadingListRepository, PostgresUserRepository};

/// Every category of the caller's reading list
#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub books: BooksView,
}

/// Number of books per category
#[derive(Debug, Serialize)]
pub struct ShelfCounts {
    pub read: usize,
    pub unread: usize,
    pub purchased: usize,
    pub dropped: usize,
    pub total: usize,
}

impl From<&ReadingList> for ShelfCounts {
    fn from(list: &ReadingList) -> Self {
        Self {
            read: list.books(ListCategory::Read).len(),
            unread: list.books(ListCategory::Unread).len(),
            purchased: list.books(ListCategory::Purchased).len(),
            dropped: list.books(ListCategory::Dropped).len(),
            total: list.len(),
        }
    }
}

/// Profile of the logged-in user
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub books: BooksView,
    pub counts: ShelfCounts,
}

/// Add a book to and/or remove it from the caller's reading list
///
/// POST /books/action
///
/// Anonymous callers get `{"UserNotLoggedIn": true}` with status 200 so the
/// browser script can prompt for login. The body is parsed only after the
/// session check and is accepted whatever its content type.
pub async fn action(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let Some(user) = user else {
        return Ok(Json(json!({ "UserNotLoggedIn": true })));
    };

    let action: ListAction = serde_json::from_slice(&body)
        .map_err(|e| ApiError::bad_request(format!("Invalid action: {}", e)))?;

    let list_repo = PostgresReadingListRepository::new(state.pool.clone());
    let stored = list_repo.find_by_user(user.user_id).await?;
    let exists = stored.is_some();
    let mut list = stored.unwrap_or_else(|| ReadingList::empty(user.user_id));

    // Rejected actions never create a row
    let changed = list.apply(&action)?;
    if changed.is_empty() {
        return Ok(Json(json!({ "success": true })));
    }

    if !exists {
        list_repo.get_or_create(user.user_id).await.map_err(|e| match e {
            RepositoryError::UnknownUser(_) => ApiError::unauthorized("Login required"),
            other => ApiError::from(other),
        })?;
    }
    list_repo.save_fields(&list, &changed).await?;

    tracing::info!(
        user_id = %user.user_id,
        item_id = %action.item_id,
        add = ?action.field_add,
        remove = ?action.field_remove,
        "Reading list updated"
    );

    Ok(Json(json!({ "success": true })))
}

/// All books in the caller's reading list
///
/// GET /books/mybooks
///
/// Anonymous callers and users without a list yet get every category empty.
pub async fn my_books(
    State(state): State<AppState>,
    MaybeAuthUser(user): MaybeAuthUser,
) -> Result<Json<BooksResponse>, ApiError> {
    let books = match user {
        Some(user) => PostgresReadingListRepository::new(state.pool.clone())
            .find_by_user(user.user_id)
            .await?
            .map(|list| BooksView::from(&list))
            .unwrap_or_default(),
        None => BooksView::default(),
    };

    Ok(Json(BooksResponse { books }))
}

/// Profile and reading list of the logged-in user
///
/// GET /books/profile
pub async fn profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let account = PostgresUserRepository::new(state.pool.clone())
        .find_by_id(user.user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Login required"))?;

    let list = PostgresReadingListRepository::new(state.pool.clone())
        .find_by_user(account.id)
        .await?
        .unwrap_or_else(|| ReadingList::empty(account.id));

    Ok(Json(ProfileResponse {
        user_id: account.id,
        username: account.username.to_string(),
        email: account.email.to_string(),
        books: BooksView::from(&list),
        counts: ShelfCounts::from(&list),
    }))
}
