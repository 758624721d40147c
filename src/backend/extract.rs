//! Request Extractors
//!
//! Drop-in replacements for axum's `Json`, `Query` and `Path` extractors.
//! They extract the same way but reject with `BackendError`, so a malformed
//! body, a missing query parameter or a non-numeric id gets the usual
//! `{"error", "status"}` JSON body instead of axum's plain text.

use axum::extract::{FromRequest, FromRequestParts};

use crate::backend::error::BackendError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct ApiJson<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(BackendError))]
pub struct ApiQuery<T>(pub T);

/// Path captures
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(BackendError))]
pub struct ApiPath<T>(pub T);
