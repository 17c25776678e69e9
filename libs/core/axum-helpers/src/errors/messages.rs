//! Standard error messages for consistent error responses.

pub const INVALID_BODY: &str = "Invalid request body";
pub const UNAUTHORIZED: &str = "unauthorized";
pub const NOT_FOUND_ROUTE: &str = "The requested resource was not found";
pub const INTERNAL_ERROR: &str = "An internal server error occurred";
