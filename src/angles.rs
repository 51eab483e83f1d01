use std::f64::consts::PI;

use log::trace;

use crate::error::{check_day_of_year, check_gnomon_height, check_hour, Result};
use crate::types::{Observer, ShadowLength, ShadowTip, SolarDay, SolarPosition};

pub const AXIAL_TILT: f64 = 23.44;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Altitude in degrees at or below which the shadow is treated as unbounded.
pub const MIN_SHADOW_ALTITUDE: f64 = 0.1;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Wraps an angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to the modulus itself for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamps a would-be sine/cosine into `[-1, 1]`. NaN (a 0/0 quotient) maps to 0.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(-1.0, 1.0)
    }
}

/// `asin` that never returns NaN for inputs drifting past the unit interval.
pub fn safe_asin(x: f64) -> f64 {
    clamp_unit(x).asin()
}

/// `acos` that never returns NaN for inputs drifting past the unit interval.
pub fn safe_acos(x: f64) -> f64 {
    clamp_unit(x).acos()
}

fn orbit_angle(offset_days: f64) -> f64 {
    2.0 * PI / DAYS_PER_YEAR * offset_days
}

/// Declination in degrees, single-harmonic approximation.
pub fn solar_declination(day_of_year: u32) -> f64 {
    -AXIAL_TILT * orbit_angle(day_of_year as f64 + 10.0).cos()
}

/// Equation of time in minutes.
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = orbit_angle(day_of_year as f64 - 81.0);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Nearest standard meridian, in 15° steps. Halfway longitudes round to the even
/// meridian index.
pub fn standard_meridian(longitude: f64) -> f64 {
    DEGREES_PER_HOUR * (longitude / DEGREES_PER_HOUR).round_ties_even()
}

/// Clock-to-solar time correction in hours.
pub fn time_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * (longitude - standard_meridian(longitude)) + eot) / 60.0
}

pub fn local_solar_time(local_hour: f64, correction: f64) -> f64 {
    local_hour + correction
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_alt = lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(safe_asin(sin_alt))
}

/// Azimuth clockwise from north. `acos` only covers the eastern half, so positions
/// with `sin(H) > 0` are mirrored onto the western half.
pub fn solar_azimuth(latitude: f64, declination: f64, altitude: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let alt_rad = deg_to_rad(altitude);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_az =
        (dec_rad.sin() - lat_rad.sin() * alt_rad.sin()) / (lat_rad.cos() * alt_rad.cos());
    let az = safe_acos(cos_az);
    let az = if ha_rad.sin() > 0.0 { PI + (PI - az) } else { az };
    normalize_angle(rad_to_deg(az))
}

pub fn shadow_length(altitude: f64, gnomon_height: f64) -> ShadowLength {
    if altitude > MIN_SHADOW_ALTITUDE {
        ShadowLength::Defined(gnomon_height / deg_to_rad(altitude).tan())
    } else {
        ShadowLength::Undefined
    }
}

/// Altitude, azimuth and shadow for a given hour angle. Both the single-instant
/// evaluation and every day-path sample go through here.
pub fn position_at_hour_angle(
    latitude: f64,
    declination: f64,
    hour_angle: f64,
    gnomon_height: f64,
) -> SolarPosition {
    let altitude = solar_altitude(latitude, declination, hour_angle);
    let azimuth = solar_azimuth(latitude, declination, altitude, hour_angle);
    SolarPosition {
        altitude,
        azimuth,
        shadow: shadow_length(altitude, gnomon_height),
    }
}

/// Per-date quantities shared by every evaluation on that date.
pub fn solar_day(observer: &Observer, day_of_year: u32) -> Result<SolarDay> {
    let day_of_year = check_day_of_year(day_of_year)?;
    let equation_of_time = equation_of_time(day_of_year);
    Ok(SolarDay {
        day_of_year,
        declination: solar_declination(day_of_year),
        equation_of_time,
        time_correction: time_correction(observer.longitude(), equation_of_time),
    })
}

pub fn position_at_clock_hour(
    observer: &Observer,
    day: &SolarDay,
    local_hour: f64,
    gnomon_height: f64,
) -> SolarPosition {
    let lst = local_solar_time(local_hour, day.time_correction);
    let ha = hour_angle(lst);
    trace!(
        "day {} clock {:.4}h -> solar {:.4}h, hour angle {:.3}°",
        day.day_of_year,
        local_hour,
        lst,
        ha
    );
    position_at_hour_angle(observer.latitude(), day.declination, ha, gnomon_height)
}

/// Sun position for one clock instant on the given day.
pub fn evaluate(
    observer: &Observer,
    day_of_year: u32,
    local_hour: f64,
    gnomon_height: f64,
) -> Result<SolarPosition> {
    let local_hour = check_hour(local_hour)?;
    let gnomon_height = check_gnomon_height(gnomon_height)?;
    let day = solar_day(observer, day_of_year)?;
    Ok(position_at_clock_hour(observer, &day, local_hour, gnomon_height))
}

impl SolarPosition {
    /// Where the tip of the shadow falls relative to the gnomon foot. The shadow points
    /// away from the sun, so its bearing is the azimuth plus 180°.
    pub fn shadow_tip(&self) -> Option<ShadowTip> {
        let length = self.shadow.value()?;
        let bearing = deg_to_rad(normalize_angle(self.azimuth + 180.0));
        Some(ShadowTip {
            east: length * bearing.sin(),
            north: length * bearing.cos(),
        })
    }
}
