use log::debug;

use crate::angles::{self, DEGREES_PER_HOUR};
use crate::error::{check_gnomon_height, Result, SolarError};
use crate::types::{DayPath, DayPathSample, Observer, SamplerConfig, ShadowTip, SolarDay};

const MINUTES_PER_DAY: u32 = 1440;

/// Sunrise/sunset hour angle in degrees, clamped to `0..=180`.
///
/// Polar day (`cos H0 < -1`) gives 180, polar night (`cos H0 > 1`) gives 0.
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    let lat_rad = angles::deg_to_rad(latitude);
    let decl_rad = angles::deg_to_rad(declination);
    let cos_h0 = -lat_rad.tan() * decl_rad.tan();
    angles::rad_to_deg(angles::safe_acos(cos_h0))
}

pub fn daylight_span_hours(half_day_angle: f64) -> f64 {
    2.0 * half_day_angle / DEGREES_PER_HOUR
}

/// Number of samples covering `span_hours`, both ends included.
pub fn sample_count(span_hours: f64, interval_minutes: u32) -> usize {
    (span_hours * 60.0 / interval_minutes as f64).floor() as usize + 1
}

/// Local solar hours of each sample, rising from `12 - H0/15`.
pub fn sample_hours(half_day_angle: f64, config: &SamplerConfig) -> Vec<f64> {
    let step = config.interval_minutes as f64 / 60.0;
    let first = 12.0 - half_day_angle / DEGREES_PER_HOUR;
    let count = sample_count(daylight_span_hours(half_day_angle), config.interval_minutes);
    (0..count).map(|i| first + i as f64 * step).collect()
}

pub(crate) fn check_config(config: &SamplerConfig) -> Result<()> {
    if (1..=MINUTES_PER_DAY).contains(&config.interval_minutes) {
        Ok(())
    } else {
        Err(SolarError::InvalidInterval {
            minutes: config.interval_minutes,
        })
    }
}

pub fn sample_path(observer: &Observer, day_of_year: u32, gnomon_height: f64) -> Result<DayPath> {
    sample_path_with_config(observer, day_of_year, gnomon_height, &SamplerConfig::default())
}

pub fn sample_path_with_config(
    observer: &Observer,
    day_of_year: u32,
    gnomon_height: f64,
    config: &SamplerConfig,
) -> Result<DayPath> {
    check_config(config)?;
    let gnomon_height = check_gnomon_height(gnomon_height)?;
    let day = angles::solar_day(observer, day_of_year)?;
    Ok(trace_day(observer, &day, gnomon_height, config))
}

/// Samples the day without re-validating; `day` must come from [`angles::solar_day`].
pub fn trace_day(
    observer: &Observer,
    day: &SolarDay,
    gnomon_height: f64,
    config: &SamplerConfig,
) -> DayPath {
    let half_day_angle = sunset_hour_angle(observer.latitude(), day.declination);
    let span_hours = daylight_span_hours(half_day_angle);
    let hours = sample_hours(half_day_angle, config);
    debug!(
        "day {}: H0 {:.3}°, span {:.3}h, {} samples every {} min",
        day.day_of_year,
        half_day_angle,
        span_hours,
        hours.len(),
        config.interval_minutes
    );

    let samples = hours
        .into_iter()
        .map(|hour| DayPathSample {
            hour,
            clock_hour: hour - day.time_correction,
            position: angles::position_at_hour_angle(
                observer.latitude(),
                day.declination,
                angles::hour_angle(hour),
                gnomon_height,
            ),
        })
        .collect();

    DayPath {
        half_day_angle,
        span_hours,
        samples,
    }
}

impl DayPath {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn hours(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.hour)
    }

    /// Shadow tip offsets of every sample with a defined shadow, in time order.
    pub fn shadow_trace(&self) -> Vec<ShadowTip> {
        self.samples
            .iter()
            .filter(|s| s.position.altitude > 0.0)
            .filter_map(|s| s.position.shadow_tip())
            .collect()
    }
}
