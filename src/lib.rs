pub mod angles;
pub mod calculation;
pub mod day_path;
pub mod error;
pub mod time;
pub mod types;

pub use angles::{
    clamp_unit, deg_to_rad, equation_of_time, evaluate, hour_angle, local_solar_time,
    normalize_angle, position_at_clock_hour, position_at_hour_angle, rad_to_deg, safe_acos,
    safe_asin, shadow_length, solar_altitude, solar_azimuth, solar_day, solar_declination,
    standard_meridian, time_correction, AXIAL_TILT, DEGREES_PER_HOUR, MIN_SHADOW_ALTITUDE,
};

pub use calculation::{
    calculate, calculate_with, compare_sites, CalculationRequest, CalculationResult, Site,
    SiteComparison, DEFAULT_GNOMON_HEIGHT, PRESET_SITES,
};

pub use day_path::{
    daylight_span_hours, sample_count, sample_hours, sample_path, sample_path_with_config,
    sunset_hour_angle, trace_day,
};

pub use error::{Result, SolarError};

pub use time::{day_of_year, normalize, parse_local, Clock, FixedClock, SystemClock};

pub use types::{
    DayPath, DayPathSample, Instant, InstantSource, Observer, SamplerConfig, ShadowLength,
    ShadowTip, SolarDay, SolarPosition,
};
