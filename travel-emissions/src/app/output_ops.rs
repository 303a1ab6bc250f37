use serde::Serialize;

use super::EmissionsAppError;

/// writes rows as CSV text with a header row.
pub fn write_csv<T: Serialize>(rows: &[T]) -> Result<String, EmissionsAppError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(vec![]);
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes)
        .map_err(|e| EmissionsAppError::InternalError(format!("CSV output is not UTF-8: {e}")))
}

pub fn write_json<T: Serialize>(value: &T) -> Result<String, EmissionsAppError> {
    let result = serde_json::to_string_pretty(value)?;
    Ok(result)
}
