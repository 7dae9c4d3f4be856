//! Serde helpers for timestamps.

/// Serialize a `DateTime<Utc>` as integer milliseconds since the Unix epoch.
///
/// Use with `#[serde(with = "crate::util::serde::ts_millis")]`.
pub mod ts_millis {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    /// Serialize as milliseconds.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(ts.timestamp_millis())
    }

    /// Deserialize from milliseconds.
    ///
    /// # Errors
    /// Fails when the value is not an integer or is out of chrono's range.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ms = i64::deserialize(deserializer)?;
        Utc.timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {ms}")))
    }
}
