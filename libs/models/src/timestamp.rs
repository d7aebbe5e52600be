//! RFC 3339 parsing for opaque timestamp fields

use chrono::{DateTime, Utc};

use common::{ModelError, ModelResult};

/// Parse an optional RFC 3339 timestamp into UTC
pub(crate) fn parse_utc(
    field: &'static str,
    value: Option<&str>,
) -> ModelResult<Option<DateTime<Utc>>> {
    value
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|source| ModelError::Timestamp { field, source })
        })
        .transpose()
}
