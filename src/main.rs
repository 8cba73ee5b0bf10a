use anyhow::{Context, bail};
use log::{info, warn};

use globevis_rs::animation::Scheduler;
use globevis_rs::geometry::FeatureCollection;
use globevis_rs::globe::{CountryId, Globe};
use globevis_rs::quake::{Quake, fetch_earthquakes};
use globevis_rs::scene::SphereProjector;
use globevis_rs::settings::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let Some(countries_path) = args.get(1) else {
        bail!("usage: {} <countries.geojson>", env!("CARGO_PKG_NAME"));
    };

    let settings = Settings::load();
    // Writes the defaults out on first run so they can be edited
    settings.save();
    let projector = SphereProjector::default();

    let json = std::fs::read_to_string(countries_path)
        .with_context(|| format!("reading {countries_path}"))?;
    let collection = FeatureCollection::from_json(&json)
        .with_context(|| format!("parsing {countries_path}"))?;
    let mut globe = Globe::from_collection(&collection, &projector)?;

    let quakes = if settings.feed.enabled {
        let rt = tokio::runtime::Runtime::new()?;
        match rt.block_on(fetch_earthquakes(&settings.feed)) {
            Ok(quakes) => quakes,
            Err(e) => {
                warn!("Earthquake feed unavailable: {e}");
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    let mut hit: Vec<(CountryId, &Quake)> = Vec::new();
    for quake in &quakes {
        let place = quake.properties.place.as_deref().unwrap_or("unknown place");
        match globe.country_of(quake) {
            Some(country) => {
                info!("M{:.1} {} -> {}", quake.magnitude(), place, country.name);
                hit.push((country.id, quake));
            }
            None => info!("M{:.1} {} -> open water", quake.magnitude(), place),
        }
    }

    // Drive the hover state machine the way a pointer sweeping over each epicentre would
    let mut scheduler = Scheduler::new();
    let sim = &settings.simulation;
    if !(sim.frame_dt > 0.0) {
        bail!("simulation frame_dt must be positive, got {}", sim.frame_dt);
    }
    for (id, quake) in &hit {
        globe.hover(Some(&quake.location()), &mut scheduler, &settings.focus)?;
        for _ in 0..sim.hover_frames {
            scheduler.update(sim.frame_dt);
        }
        if let Some(country) = globe.country(*id) {
            info!(
                "{}: scale {:.4}, {} animations active",
                country.name,
                country.get_scale(),
                scheduler.len()
            );
        }
    }

    globe.hover(None, &mut scheduler, &settings.focus)?;
    while !scheduler.is_empty() {
        scheduler.update(sim.frame_dt);
    }

    info!(
        "{} of {} earthquakes fell inside a country",
        hit.len(),
        quakes.len()
    );
    Ok(())
}
