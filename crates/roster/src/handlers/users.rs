//! User directory handlers.

use axum::{
    Extension,
    extract::{Path, Query},
    response::Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{database::Database, errors::AppError, models::User};

use super::pagination::{PaginatedResponse, PaginationQuery};

/// User creation request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub address: String,
}

/// List users, paginated, in insertion order.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of users", body = PaginatedResponse<User>)
    )
)]
pub async fn list_users(
    Extension(db): Extension<Database>,
    Query(page): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<User>>, AppError> {
    let (limit, offset) = page.clamped();

    let total_count = db.count_users().await?;
    let items = db.list_users(limit, offset).await?;

    Ok(Json(PaginatedResponse::new(items, total_count, limit, offset)))
}

/// Get a single user by id.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    Extension(db): Extension<Database>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = db.get_user(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(user))
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "CSRF token missing or mismatched")
    )
)]
pub async fn create_user(
    Extension(db): Extension<Database>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<User>, AppError> {
    let name = request.name.trim();
    let email = request.email.trim();
    let address = request.address.trim();

    if name.is_empty() || address.is_empty() {
        return Err(AppError::InvalidInput(
            "name and address must be non-empty".to_string(),
        ));
    }
    if !email.contains('@') {
        return Err(AppError::InvalidInput(
            "email must contain '@'".to_string(),
        ));
    }

    let user = User::new(name.to_string(), email.to_string(), address.to_string());
    db.insert_user(&user).await?;

    Ok(Json(user))
}
