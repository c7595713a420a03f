//! UniDriver - campus ride-sharing chat
//!
//! Terminal front-end for per-ride message channels: pass a ride id to
//! open its chat, or run with no arguments to list available rides.

use std::io::BufRead;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use unidriver_core::{
    identity, ChannelRegistry, ChatController, Error, RideCatalog, RideId, StaticCatalog,
};

mod config;
mod render;

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting UniDriver");

    let config = config::AppConfig::load();

    let viewer = match identity::resolve(Some(&config.viewer)) {
        Ok(viewer) => viewer,
        Err(e) => {
            tracing::error!("Failed to resolve viewer identity: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = StaticCatalog::new(config.load_rides());

    let ride_id = match std::env::args().nth(1) {
        Some(arg) => RideId::from(arg),
        None => {
            print_ride_listing(&catalog);
            return;
        }
    };

    let registry = ChannelRegistry::new(catalog);
    let renderer = render::TerminalRenderer::stdout();
    let mut controller = ChatController::new(registry, viewer, renderer);

    match controller.open(&ride_id) {
        Ok(()) => {}
        Err(Error::RideNotFound(id)) => {
            println!("Carona {} não encontrada.", id);
            return;
        }
        Err(e) => {
            tracing::error!("Failed to open ride channel: {}", e);
            std::process::exit(1);
        }
    }

    println!();
    println!(
        "Conectado como {} ({}). Digite sua mensagem (/sair para encerrar):",
        controller.viewer().display_name,
        controller.viewer().role
    );

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        if line.trim() == "/sair" {
            break;
        }

        if let Err(e) = controller.send(&line) {
            tracing::error!("Failed to send message: {}", e);
        }
    }
}

fn print_ride_listing(catalog: &StaticCatalog) {
    println!("Caronas disponíveis:");
    for ride in catalog.rides() {
        println!(
            "  {:>3}  {}  {} às {}  {}  {} {}  R$ {:.2}",
            ride.id,
            ride.route(),
            ride.format_departure_date(),
            ride.format_departure_time(),
            ride.driver_name,
            ride.seats,
            if ride.seats == 1 { "lugar" } else { "lugares" },
            ride.price
        );
    }
    println!();
    println!("Uso: unidriver <carona>");
}
