//! HTTP request handlers for the roster API.

// Utility submodules
pub mod pagination;

// Handler modules
pub mod pages;
pub mod users;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use pages::{__path_health_check, health_check, index};
pub use users::{
    __path_create_user, __path_get_user, __path_list_users, CreateUserRequest, create_user,
    get_user, list_users,
};
