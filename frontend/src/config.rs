use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const CONTACT_EMAIL: &str = "zkoroma@optimalhealthcare.net";

// Toast
pub const TOAST_DURATION_MS: u32 = 2200;

// Entrance stagger
pub const STAGGER_STEP_MS: u32 = 80;
pub const STAGGER_CAP_MS: u32 = 320;

// Scroll tracker
pub const FAB_THRESHOLD_PX: f64 = 480.0;
pub const TRACKED_SECTIONS: [&str; 5] = ["about", "services", "team", "benefits", "contact"];
pub const SECTION_THRESHOLDS: [f64; 3] = [0.25, 0.4, 0.6];

// Observers
pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const STATS_THRESHOLD: f64 = 0.35;

// Stat counters
pub const COUNT_DURATION_MS: f64 = 900.0;

// Testimonials
pub const TESTIMONIAL_FADE_MS: u32 = 180;
pub const TESTIMONIAL_ROTATE_MS: u32 = 7000;
