use chrono::TimeZone;
use chrono_tz::Asia::Tokyo;

use sun_position::annual::annual_timestamps;
use sun_position::sun::{sun_position_at, sun_position_culled};
use sun_position::types::GeoLocation;

fn main() -> sun_position::Result<()> {
    env_logger::init();

    let location = GeoLocation::default();
    let dt = Tokyo.with_ymd_and_hms(2015, 3, 21, 12, 0, 0).unwrap();

    let pos = sun_position_at(&dt, &location)?;

    println!("=== Sun Position Example ===");
    println!(
        "Location: Tokyo ({:.4}°N, {:.4}°E)",
        location.latitude, location.longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Sun Position ---");
    println!("Azimuth: {:.4} rad (+Y is north)", pos.azimuth);
    println!("Compass azimuth: {:.2}° (0°=N, 90°=E, 180°=S)", pos.compass_azimuth().to_degrees());
    println!("Elevation: {:.4} rad ({:.2}°)", pos.elevation, pos.elevation_degrees());
    println!("Zenith: {:.2}°", pos.zenith().to_degrees());
    println!();

    let timestamps = annual_timestamps(2015, 6, 21, 1)?;
    let mut above = 0;
    for ts in &timestamps {
        if sun_position_culled(ts, &location, 9.0, true)?.is_some() {
            above += 1;
        }
    }
    println!("--- Annual Grid ---");
    println!("Timestamps: {}", timestamps.len());
    println!("Above horizon: {}", above);

    Ok(())
}
