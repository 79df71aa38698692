//! Request extractors whose rejections render as problem details

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::DashboardError;

/// JSON body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(DashboardError))]
pub struct ApiJson<T>(pub T);

/// Path parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(DashboardError))]
pub struct ApiPath<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(DashboardError))]
pub struct ApiQuery<T>(pub T);
