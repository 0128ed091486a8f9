use anyhow::Context;
use chrono::{Local, Timelike};
use practice_room_map::filter::store::format_won;
use practice_room_map::home::HomeScreen;
use practice_room_map::map::{HeadlessMap, HeadlessScript, MarkerCallback, SdkLoader};
use practice_room_map::models::ReserveRequest;
use practice_room_map::reservation::{PaymentMethod, PaymentSummary, ReservationForm};
use practice_room_map::sources::{HttpRoomSource, MockRoomSource, RoomSource};
use practice_room_map::Config;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("practice_room_map=info")),
        )
        .init();

    let config = Config::from_env();

    info!("🎸 Practice Room Map");
    info!("====================");

    let source: Box<dyn RoomSource> = match &config.rooms_api_url {
        Some(url) => Box::new(match config.http_timeout_secs {
            Some(secs) => HttpRoomSource::with_timeout(url, Duration::from_secs(secs))?,
            None => HttpRoomSource::new(url)?,
        }),
        None => {
            info!("ROOMS_API_URL not set, using mock rooms");
            Box::new(MockRoomSource::new())
        }
    };

    let on_select: MarkerCallback = Arc::new(|id: &str| info!("📍 Room {} selected", id));
    let mut home: HomeScreen<HeadlessMap> = HomeScreen::new(config.default_center, on_select);

    let sdk = SdkLoader::new(HeadlessScript, config.map_app_key.clone());
    match sdk.ensure_loaded().await {
        Ok(()) => {
            home.attach_map(HeadlessMap::new(config.default_center, config.zoom_level));
        }
        Err(e) => {
            warn!("Map disabled: {}", e);
            home.map_failed(e);
        }
    }

    home.load(source.as_ref())
        .await
        .context("Failed to load rooms")?;

    // Display results
    let rooms = home.visible_rooms();
    info!("✅ {} rooms available\n", rooms.len());
    for (i, room) in rooms.iter().enumerate() {
        println!("{}. {} ({}원/h)", i + 1, room.name, format_won(room.price_per_hour));
        println!("   {}", room.address);
        println!(
            "   up to {} people, {}원 for the whole room",
            room.capacity,
            format_won(room.total_price())
        );
        println!("   ★ {:.1} ({} reviews)", room.rating, room.review_count);
        println!();
    }

    home.update_filters(|store| store.set_people(5));
    let large = home.visible_rooms();
    info!("{} rooms fit 5 or more people", large.len());

    let Some(room) = large.first() else {
        info!("Nothing to reserve");
        return Ok(());
    };

    // Book the next two bookable hours of today or tomorrow
    let now = Local::now().naive_local();
    let mut form = ReservationForm::new(
        ReserveRequest {
            room_name: room.name.clone(),
            hourly_price: room.price_per_hour,
        },
        now,
    );
    if now.hour() >= 21 {
        if let Some(tomorrow) = now.date().succ_opt() {
            form.select_date(tomorrow)?;
        }
    }
    let first = (0..=22u8)
        .find(|h| form.policy().check_range(*h, *h + 1).is_ok())
        .context("No bookable hours left")?;
    form.pick_hour(first)?;
    form.pick_hour(first + 1)?;
    form.options_mut().adjust(0, 1);

    let checkout = form.checkout()?;
    let summary = PaymentSummary::new(&checkout, PaymentMethod::Card);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let json = serde_json::to_string_pretty(&checkout)?;
    tokio::fs::write("checkout.json", json).await?;
    info!("💾 Saved checkout to checkout.json");

    Ok(())
}
