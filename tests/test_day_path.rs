use gnomon::angles::evaluate;
use gnomon::day_path::*;
use gnomon::time::day_of_year;
use gnomon::types::*;
use gnomon::SolarError;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

fn observer(lat: f64, lon: f64) -> Observer {
    Observer::new(lat, lon).unwrap()
}

fn doy(year: i32, month: u32, day: u32) -> u32 {
    day_of_year(year, month, day).unwrap()
}

// ── Config ──

#[test]
fn test_default_config() {
    assert_eq!(SamplerConfig::default().interval_minutes, 15);
}

#[test]
fn test_rejects_zero_and_oversized_interval() {
    let obs = observer(10.0, 0.0);
    for minutes in [0, 1441] {
        let config = SamplerConfig {
            interval_minutes: minutes,
        };
        assert_eq!(
            sample_path_with_config(&obs, 100, 1.0, &config),
            Err(SolarError::InvalidInterval { minutes })
        );
    }
}

#[test]
fn test_rejects_invalid_day_and_gnomon() {
    let obs = observer(10.0, 0.0);
    assert_eq!(
        sample_path(&obs, 0, 1.0),
        Err(SolarError::InvalidDayOfYear { value: 0 })
    );
    assert!(matches!(
        sample_path(&obs, 10, f64::NAN),
        Err(SolarError::InvalidGnomonHeight { .. })
    ));
}

// ── Sample counting ──

#[test]
fn test_sample_count() {
    assert_eq!(sample_count(12.0, 15), 49);
    assert_eq!(sample_count(0.0, 15), 1);
    assert_eq!(sample_count(24.0, 60), 25);
    assert_eq!(sample_count(10.1, 15), 41);
}

#[test]
fn test_sample_hours_centered_on_noon() {
    let hours = sample_hours(90.0, &SamplerConfig::default());
    assert_eq!(hours.len(), 49);
    assert_approx!(hours[0], 6.0, 1e-12);
    assert_approx!(hours[24], 12.0, 1e-12);
    assert_approx!(hours[48], 18.0, 1e-12);
}

// ── Sunset hour angle ──

#[test]
fn test_equator_has_twelve_hour_day() {
    assert_approx!(sunset_hour_angle(0.0, 0.0), 90.0, 1e-12);
    assert_approx!(sunset_hour_angle(0.0, 23.44), 90.0, 1e-12);
    assert_approx!(daylight_span_hours(90.0), 12.0, 1e-12);
}

#[test]
fn test_summer_longer_than_winter() {
    let summer = sunset_hour_angle(39.8, 23.44);
    let winter = sunset_hour_angle(39.8, -23.44);
    assert!(summer > 90.0 && winter < 90.0);
    assert_approx!(summer + winter, 180.0, 1e-9);
}

#[test]
fn test_polar_day_and_night_clamp() {
    assert_approx!(sunset_hour_angle(80.0, 23.44), 180.0, 1e-12);
    assert_approx!(sunset_hour_angle(80.0, -23.44), 0.0, 1e-12);
    assert_approx!(sunset_hour_angle(-80.0, -23.44), 180.0, 1e-12);
}

// ── Equinox symmetry ──

#[test]
fn test_equator_equinox_path_is_symmetric() {
    let path = sample_path(&observer(0.0, 0.0), doy(2024, 3, 20), 1.0).unwrap();
    assert_approx!(path.half_day_angle, 90.0, 1e-9);
    assert_approx!(path.span_hours, 12.0, 1e-9);
    assert_eq!(path.len(), 49);

    let n = path.len();
    for i in 0..n / 2 {
        let (am, pm) = (&path.samples[i], &path.samples[n - 1 - i]);
        assert_approx!(am.hour - 12.0, 12.0 - pm.hour, 1e-9);
        assert_approx!(am.position.altitude, pm.position.altitude, 1e-9);
        assert_approx!(am.position.azimuth + pm.position.azimuth, 360.0, 1e-6);
    }
    let noon = &path.samples[n / 2];
    assert!(noon.position.altitude > 89.0, "noon altitude={}", noon.position.altitude);
}

#[test]
fn test_path_ends_at_horizon() {
    let path = sample_path(&observer(0.0, 0.0), doy(2024, 3, 20), 1.0).unwrap();
    let first = path.samples.first().unwrap();
    let last = path.samples.last().unwrap();
    assert_approx!(first.position.altitude, 0.0, 1e-6);
    assert_approx!(last.position.altitude, 0.0, 1e-6);
    assert_eq!(first.position.shadow, ShadowLength::Undefined);
    assert_eq!(last.position.shadow, ShadowLength::Undefined);
}

// ── Ordering / consistency ──

#[test]
fn test_hours_strictly_increasing() {
    let path = sample_path(&observer(51.5, -0.13), doy(2024, 6, 21), 1.0).unwrap();
    let hours: Vec<f64> = path.hours().collect();
    assert_eq!(hours.len(), path.len());
    for pair in hours.windows(2) {
        assert_approx!(pair[1] - pair[0], 0.25, 1e-9);
    }
}

#[test]
fn test_samples_match_clock_evaluation() {
    let obs = observer(51.5, -0.13);
    let n = doy(2024, 6, 21);
    let path = sample_path(&obs, n, 1.5).unwrap();
    for sample in &path.samples {
        let pos = evaluate(&obs, n, sample.clock_hour, 1.5).unwrap();
        assert_approx!(pos.altitude, sample.position.altitude, 1e-6);
        assert_approx!(pos.azimuth, sample.position.azimuth, 1e-6);
    }
}

#[test]
fn test_custom_interval() {
    let config = SamplerConfig {
        interval_minutes: 60,
    };
    let path = sample_path_with_config(&observer(0.0, 0.0), 80, 1.0, &config).unwrap();
    assert_eq!(path.len(), 13);
    assert_approx!(path.samples[1].hour - path.samples[0].hour, 1.0, 1e-12);
}

#[test]
fn test_repeatable() {
    let obs = observer(-33.9, 151.2);
    let a = sample_path(&obs, 30, 1.0).unwrap();
    let b = sample_path(&obs, 30, 1.0).unwrap();
    assert_eq!(a, b);
}

// ── Polar degeneracy ──

#[test]
fn test_near_pole_midsummer_full_day() {
    let path = sample_path(&observer(89.0, 0.0), doy(2024, 6, 21), 1.0).unwrap();
    assert_approx!(path.half_day_angle, 180.0, 1e-9);
    assert_approx!(path.span_hours, 24.0, 1e-9);
    assert_eq!(path.len(), 97);
    assert_approx!(path.samples[0].hour, 0.0, 1e-12);
    assert_approx!(path.samples[96].hour, 24.0, 1e-12);
    for s in &path.samples {
        assert!(s.position.altitude.is_finite() && s.position.azimuth.is_finite());
        let len = s.position.shadow.value().expect("sun stays up all day");
        assert!(len.is_finite() && len > 0.0);
    }
}

#[test]
fn test_southern_polar_day_in_december() {
    let path = sample_path(&observer(-75.0, 0.0), doy(2024, 12, 21), 1.0).unwrap();
    assert_eq!(path.len(), 97);
}

#[test]
fn test_polar_night_single_noon_sample() {
    let path = sample_path(&observer(89.0, 0.0), doy(2024, 12, 21), 1.0).unwrap();
    assert_approx!(path.span_hours, 0.0, 1e-12);
    assert_eq!(path.len(), 1);
    assert_approx!(path.samples[0].hour, 12.0, 1e-12);
    assert!(path.samples[0].position.altitude < 0.0);
    assert_eq!(path.samples[0].position.shadow, ShadowLength::Undefined);
    assert!(path.shadow_trace().is_empty());
}

// ── Shadow trace ──

#[test]
fn test_shadow_trace_skips_undefined_samples() {
    let path = sample_path(&observer(0.0, 0.0), doy(2024, 3, 20), 1.0).unwrap();
    let defined = path
        .samples
        .iter()
        .filter(|s| s.position.shadow.is_defined())
        .count();
    let trace = path.shadow_trace();
    assert_eq!(trace.len(), defined);
    assert_eq!(trace.len(), path.len() - 2);
    assert!(trace.iter().all(|t| t.east.is_finite() && t.north.is_finite()));
}

#[test]
fn test_shadow_trace_sweeps_west_to_east() {
    let path = sample_path(&observer(51.5, -0.13), doy(2024, 6, 21), 1.0).unwrap();
    let trace = path.shadow_trace();
    assert!(trace.first().unwrap().east < 0.0, "morning shadow points west");
    assert!(trace.last().unwrap().east > 0.0, "evening shadow points east");
}
