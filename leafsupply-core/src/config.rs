//! Compile-time panel configuration
//!
//! Every threshold the panel uses lives here. There is exactly one
//! instance, [`PanelConfig::DEFAULT`]; nothing is adjustable at runtime.

use crate::input::ReleaseDebounce;
use crate::render::{MAX_RENDER_TENTHS, VALUE_WIDTH};
use crate::state::{OutputPattern, SELECT_MASK};

/// Character columns per display row
pub const FIELD_WIDTH: usize = 16;

/// Configuration rejected by [`PanelConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Default pattern drives no select line, so no key can raise the sense line
    NoSelectLines,
    /// Rotation step of zero
    ZeroStep,
    /// Readout would overlap the title or run past the row
    FieldOverflow,
    /// Release debounce with no poll budget
    ZeroTimeout,
}

/// Panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Pattern written at boot and restored after each scan
    pub default_pattern: OutputPattern,
    /// Counter change per encoder detent (0.1 V units)
    pub step_tenths: u16,
    /// Counter saturation point (0.1 V units)
    pub max_tenths: u16,
    /// Title shown at the start of the readout row
    pub title: &'static str,
    /// Row holding the title and voltage readout
    pub readout_row: u8,
    /// Row receiving button labels
    pub label_row: u8,
    /// Interval between sense-line polls while awaiting release (us)
    pub release_poll_us: u32,
    /// Polls before the release wait gives up
    pub release_timeout_polls: u16,
}

impl PanelConfig {
    /// The shipped configuration
    pub const DEFAULT: PanelConfig = PanelConfig {
        // LEDs 1000, all four select lines driven while idle
        default_pattern: OutputPattern::new(0b1111_1000),
        step_tenths: 1,
        max_tenths: 999,
        title: "LM317",
        readout_row: 0,
        label_row: 1,
        release_poll_us: 1_000,
        release_timeout_polls: 2_000,
    };

    /// Fresh release debouncer with this poll interval and budget
    pub const fn release_debounce(&self) -> ReleaseDebounce {
        ReleaseDebounce::new(self.release_poll_us, self.release_timeout_polls)
    }

    /// Check the invariants the panel relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_pattern.bits() & SELECT_MASK == 0 {
            return Err(ConfigError::NoSelectLines);
        }
        if self.step_tenths == 0 {
            return Err(ConfigError::ZeroStep);
        }
        // Four digits of tenths would render as "100.0V", one past VALUE_WIDTH
        if self.title.len() + VALUE_WIDTH > FIELD_WIDTH || self.max_tenths > MAX_RENDER_TENTHS {
            return Err(ConfigError::FieldOverflow);
        }
        if self.release_timeout_polls == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
