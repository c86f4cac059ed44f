//! Auth module - user and session domain models.

mod auth_model;


// Re-export the public interface
pub use auth_model::{
    AuthResponse, AuthTokens, ChangePasswordRequest, LoginRequest, RefreshedTokens,
    RegisterRequest, UpdateProfileRequest, User, UserStats,
};
