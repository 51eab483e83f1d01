use gnomon::{calculate, compare_sites, CalculationRequest, ShadowLength, SystemClock, PRESET_SITES};

fn shadow_text(shadow: ShadowLength) -> String {
    match shadow {
        ShadowLength::Defined(length) => format!("{length:.3}"),
        ShadowLength::Undefined => "—".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let request = CalculationRequest::new(51.5, -0.13)
        .with_date("2024-12-21")
        .with_time("12:00")
        .with_gnomon_height(1.0);

    let result = calculate(&request)?;

    println!("=== Gnomon Shadow Calculation ===");
    println!(
        "Location: London ({:.2}°N, {:.2}°W)",
        request.latitude, -request.longitude
    );
    println!("Date/Time: {}", result.instant);
    println!();
    println!("--- Sun ---");
    println!("Day of year: {}", result.day.day_of_year);
    println!("Declination: {:.2}°", result.declination());
    println!("Equation of Time: {:.2} minutes", result.day.equation_of_time);
    println!("Altitude: {:.2}°", result.position.altitude);
    println!(
        "Azimuth: {:.2}° (0°=N, 90°=E, 180°=S)",
        result.position.azimuth
    );
    println!("Shadow length: {}", shadow_text(result.position.shadow));
    println!();
    println!("--- Day path ---");
    println!(
        "Daylight: {:.2} h, {} samples",
        result.path.span_hours,
        result.path.len()
    );
    for sample in result.path.samples.iter().step_by(4) {
        println!(
            "  {:5.2}h solar ({:5.2}h clock)  alt {:6.2}°  az {:6.2}°  shadow {}",
            sample.hour,
            sample.clock_hour,
            sample.position.altitude,
            sample.position.azimuth,
            shadow_text(sample.position.shadow)
        );
    }
    println!();
    println!("--- Comparison ---");
    for cmp in compare_sites(&PRESET_SITES, Some("2024-12-21"), Some("12:00"), 1.0, &SystemClock)? {
        println!(
            "{:<16} alt {:6.2}°  shadow {}",
            cmp.site.name,
            cmp.result.position.altitude,
            shadow_text(cmp.result.position.shadow)
        );
    }
    Ok(())
}
