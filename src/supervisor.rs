//! Application supervisor and monitoring
//!
//! Runs on core 1: prints the startup banner and a periodic uptime
//! status line. Purely observational; the agents never depend on it.

use embassy_time::{Duration, Timer};

use crate::config;
use crate::fmt::info;

/// Application supervisor responsible for startup reporting and uptime
/// monitoring
pub struct Supervisor {
    uptime_seconds: u32,
    last_heartbeat: u32,
}

impl Supervisor {
    pub fn new() -> Self {
        Self {
            uptime_seconds: 0,
            last_heartbeat: 0,
        }
    }

    /// Print the startup banner with the firmware configuration
    pub fn print_startup_banner(&self) {
        info!("========================================");
        info!("Switchboard v{}", env!("CARGO_PKG_VERSION"));
        info!("Hardware: RP2040 (Raspberry Pi Pico)");
        info!("Queue depth: {}", config::QUEUE_DEPTH);
        info!("Producer cadence: {}", config::PRODUCER_CADENCE);
        info!("Consumer cadence: {}", config::CONSUMER_CADENCE);
        info!(
            "Switch outputs: green={} red={}",
            config::GREEN_SWITCH_PIN,
            config::RED_SWITCH_PIN
        );
        info!("========================================");
    }

    /// Run the supervisor loop
    pub async fn run(&mut self) {
        info!("Supervisor started");

        loop {
            Timer::after(Duration::from_secs(10)).await;
            self.uptime_seconds += 10;

            // Status line every 60 seconds
            if self.uptime_seconds - self.last_heartbeat >= 60 {
                info!("Status: uptime {} s", self.uptime_seconds);
                self.last_heartbeat = self.uptime_seconds;
            }
        }
    }

    /// Current uptime in seconds
    pub fn uptime(&self) -> u32 {
        self.uptime_seconds
    }
}

impl Default for Supervisor {
    fn default() -> Self {
        Self::new()
    }
}
