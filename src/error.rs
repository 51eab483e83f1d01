//! Error types for the gnomon crate.

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, SolarError>;

/// Errors reported at the engine boundary, before any computation starts.
///
/// Numeric degeneracies (sun below the horizon, polar day or night) are not errors;
/// they surface as [`crate::ShadowLength::Undefined`] or a clamped day path.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Latitude is non-finite or outside -90..=90 degrees.
    #[error("invalid latitude {value}° (must be between -90° and +90°)")]
    InvalidLatitude {
        /// The rejected latitude.
        value: f64,
    },

    /// Longitude is non-finite or outside -180..=180 degrees.
    #[error("invalid longitude {value}° (must be between -180° and +180°)")]
    InvalidLongitude {
        /// The rejected longitude.
        value: f64,
    },

    /// Gnomon height is NaN or infinite.
    #[error("gnomon height must be finite, got {value}")]
    InvalidGnomonHeight {
        /// The rejected height.
        value: f64,
    },

    /// Day-of-year ordinal outside 1..=366.
    #[error("day of year must be within 1..=366, got {value}")]
    InvalidDayOfYear {
        /// The rejected ordinal.
        value: u32,
    },

    /// Clock hour is NaN or infinite.
    #[error("local hour must be finite, got {value}")]
    InvalidHour {
        /// The rejected hour.
        value: f64,
    },

    /// Sampling interval does not divide into a positive number of minutes.
    #[error("sample interval must be between 1 and 1440 minutes, got {minutes}")]
    InvalidInterval {
        /// The rejected interval.
        minutes: u32,
    },

    /// A date or time string is not zero-padded `YYYY-MM-DD` / `HH:MM`.
    #[error("`{input}` is not a zero-padded YYYY-MM-DDTHH:MM local date/time")]
    MalformedDateTime {
        /// The combined input that failed the shape check.
        input: String,
    },

    /// A date or time string could not be parsed.
    #[error("cannot parse `{input}` as a local date/time")]
    UnparseableDateTime {
        /// The combined input that failed to parse.
        input: String,
        /// Underlying chrono parse failure.
        #[source]
        source: chrono::ParseError,
    },
}

pub(crate) fn check_latitude(value: f64) -> Result<f64> {
    if value.is_finite() && (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        Err(SolarError::InvalidLatitude { value })
    }
}

pub(crate) fn check_longitude(value: f64) -> Result<f64> {
    if value.is_finite() && (-180.0..=180.0).contains(&value) {
        Ok(value)
    } else {
        Err(SolarError::InvalidLongitude { value })
    }
}

pub(crate) fn check_gnomon_height(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolarError::InvalidGnomonHeight { value })
    }
}

pub(crate) fn check_day_of_year(value: u32) -> Result<u32> {
    if (1..=366).contains(&value) {
        Ok(value)
    } else {
        Err(SolarError::InvalidDayOfYear { value })
    }
}

pub(crate) fn check_hour(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SolarError::InvalidHour { value })
    }
}
