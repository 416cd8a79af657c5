//! Multipart bodies used across tests.

#![allow(dead_code)]

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;

/// Deterministic payload of `len` bytes.
pub fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub fn file_form(field: &str, filename: &str, data: Vec<u8>) -> MultipartForm {
    let part = Part::bytes(Bytes::from(data))
        .file_name(filename)
        .mime_type("application/octet-stream");
    MultipartForm::new().add_part(field.to_string(), part)
}
