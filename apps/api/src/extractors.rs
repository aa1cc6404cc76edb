use axum::extract::FromRequest;

use crate::errors::AppError;

/// `Json` extractor whose rejections go through `AppError`, so malformed or
/// oversized bodies get the same error envelope as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
