//! `--field key=value` parsing for the multipart staff commands, plus file
//! reading for uploads.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use std::path::Path;

use campus_api::Upload;
use campus_api::types::StaffPayload;

use crate::error::CliError;

/// Split one `key=value` argument. The value may itself contain `=`.
pub fn parse_field(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| CliError::MalformedField(raw.to_owned()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::MalformedField(raw.to_owned()));
    }
    Ok((key.to_owned(), value.to_owned()))
}

fn parse_bool(field: &str, value: &str) -> Result<bool, CliError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(CliError::InvalidField { field: field.to_owned(), value: value.to_owned() }),
    }
}

fn parse_id(field: &str, value: &str) -> Result<i64, CliError> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidField { field: field.to_owned(), value: value.to_owned() })
}

/// Build a staff form from `key=value` pairs. Later keys win.
pub fn staff_payload(fields: &[(String, String)], photo: Option<Upload>) -> Result<StaffPayload, CliError> {
    let mut payload = StaffPayload { photo, ..StaffPayload::default() };
    let mut department = None;
    for (key, value) in fields {
        match key.as_str() {
            "name" => payload.name.clone_from(value),
            "staff_id" => payload.staff_id.clone_from(value),
            "email" => payload.email.clone_from(value),
            "phone" => payload.phone.clone_from(value),
            "subject_expertise" => payload.subject_expertise.clone_from(value),
            "qualification" => payload.qualification.clone_from(value),
            "department" => department = Some(parse_id(key, value)?),
            "departmental_access_enabled" => payload.departmental_access_enabled = parse_bool(key, value)?,
            "mentor_access_enabled" => payload.mentor_access_enabled = parse_bool(key, value)?,
            "mentor_cluster" => payload.mentor_cluster = Some(parse_id(key, value)?),
            _ => return Err(CliError::UnknownField(key.clone())),
        }
    }
    payload.department = department.ok_or(CliError::MissingField("department"))?;
    Ok(payload)
}

/// Content type for an upload, from the file extension.
pub fn mime_for(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("xls") => "application/vnd.ms-excel",
        _ => "application/octet-stream",
    }
}

/// Read a local file into an upload named after its file name.
pub fn read_upload(path: &Path) -> Result<Upload, CliError> {
    let bytes = std::fs::read(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
    let file_name = path.file_name().map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());
    Ok(Upload::new(file_name, mime_for(path), bytes))
}
