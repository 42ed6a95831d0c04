use std::time::Duration;

use serde::Deserialize;

use crate::constants::ui;

/// Labels and pacing for the terminal view
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UiConfig {
    /// Header shown above the list
    #[serde(default = "UiConfig::default_title")]
    pub title: String,

    /// Placeholder shown while a fetch is in flight
    #[serde(default = "UiConfig::default_loading_text")]
    pub loading_text: String,

    /// Redraw ticks per second while idle
    #[serde(default = "UiConfig::default_tick_rate_hz")]
    pub tick_rate_hz: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            loading_text: Self::default_loading_text(),
            tick_rate_hz: Self::default_tick_rate_hz(),
        }
    }
}

impl UiConfig {
    fn default_title() -> String {
        ui::DEFAULT_TITLE.to_string()
    }

    fn default_loading_text() -> String {
        ui::DEFAULT_LOADING_TEXT.to_string()
    }

    const fn default_tick_rate_hz() -> f64 {
        ui::DEFAULT_TICK_RATE_HZ
    }

    /// Tick interval with the rate clamped to a sane range. NaN falls back to
    /// the default.
    pub fn tick_interval(&self) -> Duration {
        let rate = if self.tick_rate_hz.is_nan() {
            ui::DEFAULT_TICK_RATE_HZ
        } else {
            self.tick_rate_hz
                .clamp(ui::MIN_TICK_RATE_HZ, ui::MAX_TICK_RATE_HZ)
        };
        Duration::from_secs_f64(1.0 / rate)
    }
}
