use serde::{Deserialize, Serialize};

use crate::error::{check_latitude, check_longitude, Result};

/// Observer location in degrees. Built through [`Observer::new`], which rejects
/// non-finite or out-of-range coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
}

impl Observer {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        Ok(Self {
            latitude: check_latitude(latitude)?,
            longitude: check_longitude(longitude)?,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstantSource {
    /// Built from the caller's date and time strings.
    Parsed,
    /// Input was missing or unparseable; the current local time was used.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_year: u32,
    pub hour: u32,
    pub minute: u32,
    /// Clock hour as a fraction, `hour + minute / 60`.
    pub local_hour: f64,
    pub source: InstantSource,
}

/// Horizontal shadow cast by the gnomon.
///
/// `Undefined` covers altitudes at or below 0.1°, where the shadow is unbounded.
/// On the wire it is a number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Option<f64>", from = "Option<f64>")]
pub enum ShadowLength {
    Defined(f64),
    Undefined,
}

impl ShadowLength {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Defined(length) => Some(length),
            Self::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Self::Defined(_))
    }
}

impl From<ShadowLength> for Option<f64> {
    fn from(shadow: ShadowLength) -> Self {
        shadow.value()
    }
}

impl From<Option<f64>> for ShadowLength {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Undefined, Self::Defined)
    }
}

/// Quantities that depend only on the date and the observer's longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDay {
    pub day_of_year: u32,
    /// Degrees.
    pub declination: f64,
    /// Minutes.
    pub equation_of_time: f64,
    /// Hours added to clock time to get local solar time.
    pub time_correction: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub altitude: f64,
    pub azimuth: f64,
    pub shadow: ShadowLength,
}

/// Offset of the shadow tip from the foot of the gnomon, in gnomon units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadowTip {
    pub east: f64,
    pub north: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPathSample {
    /// Local solar hour; 12.0 is solar noon.
    pub hour: f64,
    /// Clock hour at which the sun reaches this sample.
    pub clock_hour: f64,
    pub position: SolarPosition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayPath {
    /// Sunrise/sunset hour angle bound in degrees, within 0..=180.
    pub half_day_angle: f64,
    /// Daylight span in hours, `2 * half_day_angle / 15`.
    pub span_hours: f64,
    pub samples: Vec<DayPathSample>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerConfig {
    pub interval_minutes: u32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_minutes: 15,
        }
    }
}
