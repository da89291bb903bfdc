//! API route handlers

pub mod automacao;
pub mod health;
pub mod ia;

use crate::sources::TableFile;
use axum::http::header;
use axum::response::{IntoResponse, Response};

/// Serve a file as an attachment
pub(crate) fn file_response(file: TableFile) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    (
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response()
}
