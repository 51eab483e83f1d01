//! One full calculation: resolve the instant, evaluate the sun for it, and trace the
//! day path for the same date.

use log::{debug, info};
use serde::{Deserialize, Serialize, Serializer};

use crate::angles;
use crate::day_path;
use crate::error::{check_gnomon_height, Result};
use crate::time::{self, Clock, SystemClock};
use crate::types::{DayPath, Instant, Observer, SamplerConfig, ShadowLength, SolarDay, SolarPosition};

pub const DEFAULT_GNOMON_HEIGHT: f64 = 1.0;

fn default_gnomon_height() -> f64 {
    DEFAULT_GNOMON_HEIGHT
}

/// Caller input, as received at the JSON boundary.
///
/// # Example
///
/// ```
/// use gnomon::CalculationRequest;
///
/// let request: CalculationRequest =
///     serde_json::from_str(r#"{"latitude": 51.5, "longitude": -0.13, "date": "2024-12-21"}"#)
///         .unwrap();
/// assert_eq!(request.gnomon_height, 1.0);
/// assert_eq!(request.time, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default = "default_gnomon_height")]
    pub gnomon_height: f64,
}

impl CalculationRequest {
    /// A request for "now" at the given location with a unit gnomon.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            date: None,
            time: None,
            gnomon_height: DEFAULT_GNOMON_HEIGHT,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_gnomon_height(mut self, height: f64) -> Self {
        self.gnomon_height = height;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    pub request: CalculationRequest,
    pub instant: Instant,
    pub day: SolarDay,
    pub position: SolarPosition,
    pub path: DayPath,
}

impl CalculationResult {
    pub fn declination(&self) -> f64 {
        self.day.declination
    }

    /// Indented JSON in the wire shape, for saving a calculation to disk.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult> {
    calculate_with(request, &SystemClock, &SamplerConfig::default())
}

/// Full calculation with an explicit clock for the fallback branch and an explicit
/// path cadence. Inputs are validated before anything is computed.
pub fn calculate_with<C: Clock + ?Sized>(
    request: &CalculationRequest,
    clock: &C,
    config: &SamplerConfig,
) -> Result<CalculationResult> {
    let observer = Observer::new(request.latitude, request.longitude)?;
    let gnomon_height = check_gnomon_height(request.gnomon_height)?;
    day_path::check_config(config)?;

    let instant = time::normalize(request.date.as_deref(), request.time.as_deref(), clock);
    let day = angles::solar_day(&observer, instant.day_of_year)?;
    let position = angles::position_at_clock_hour(&observer, &day, instant.local_hour, gnomon_height);
    let path = day_path::trace_day(&observer, &day, gnomon_height, config);

    info!(
        "{} at ({}, {}): altitude {:.2}°, azimuth {:.2}°, {} path samples",
        instant,
        observer.latitude(),
        observer.longitude(),
        position.altitude,
        position.azimuth,
        path.len()
    );
    if instant.is_fallback() {
        debug!("result computed for fallback instant {instant}");
    }

    Ok(CalculationResult {
        request: request.clone(),
        instant,
        day,
        position,
        path,
    })
}

/// A named location for side-by-side comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Site {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Historic sundial sites offered for comparison.
pub const PRESET_SITES: [Site; 3] = [
    Site {
        name: "Ujjain, India",
        latitude: 23.18,
        longitude: 75.78,
    },
    Site {
        name: "Giza, Egypt",
        latitude: 30.01,
        longitude: 31.21,
    },
    Site {
        name: "Athens, Greece",
        latitude: 37.98,
        longitude: 23.72,
    },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteComparison {
    pub site: Site,
    pub result: CalculationResult,
}

/// Evaluates every site for the same date, time and gnomon height, in input order.
pub fn compare_sites<C: Clock + ?Sized>(
    sites: &[Site],
    date: Option<&str>,
    time: Option<&str>,
    gnomon_height: f64,
    clock: &C,
) -> Result<Vec<SiteComparison>> {
    sites
        .iter()
        .map(|site| {
            let request = CalculationRequest {
                latitude: site.latitude,
                longitude: site.longitude,
                date: date.map(str::to_owned),
                time: time.map(str::to_owned),
                gnomon_height,
            };
            let result = calculate_with(&request, clock, &SamplerConfig::default())?;
            Ok(SiteComparison {
                site: *site,
                result,
            })
        })
        .collect()
}

#[derive(Serialize)]
struct WireInput<'a> {
    lat: f64,
    lon: f64,
    date: Option<&'a str>,
    time: Option<&'a str>,
    gnomon: f64,
    resolved: String,
    fallback: bool,
}

#[derive(Serialize)]
struct WirePoint {
    alt: f64,
    az: f64,
    shadow: ShadowLength,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResult<'a> {
    input: WireInput<'a>,
    day_of_year: u32,
    declination: f64,
    equation_of_time: f64,
    altitude: f64,
    azimuth: f64,
    shadow_length: ShadowLength,
    path: Vec<WirePoint>,
    hours: Vec<f64>,
}

impl Serialize for CalculationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let wire = WireResult {
            input: WireInput {
                lat: self.request.latitude,
                lon: self.request.longitude,
                date: self.request.date.as_deref(),
                time: self.request.time.as_deref(),
                gnomon: self.request.gnomon_height,
                resolved: self.instant.to_string(),
                fallback: self.instant.is_fallback(),
            },
            day_of_year: self.day.day_of_year,
            declination: self.day.declination,
            equation_of_time: self.day.equation_of_time,
            altitude: self.position.altitude,
            azimuth: self.position.azimuth,
            shadow_length: self.position.shadow,
            path: self
                .path
                .samples
                .iter()
                .map(|s| WirePoint {
                    alt: s.position.altitude,
                    az: s.position.azimuth,
                    shadow: s.position.shadow,
                })
                .collect(),
            hours: self.path.hours().collect(),
        };
        wire.serialize(serializer)
    }
}
