/// Storage key holding the bearer access token
pub const ACCESS_TOKEN_KEY: &str = "auth_token";

/// Storage key holding the refresh token
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Storage key holding the serialized user snapshot
pub const USER_KEY: &str = "user";
