//! Debounce-by-hold
//!
//! After a press has been reported the caller waits for the sense line
//! to drop before taking the next edge, so a held key does not re-trigger
//! the edge interrupt. The wait is a small state machine with a poll budget:
//!
//! ```text
//!            arm()             sense low
//!   Idle ──────────────▶ AwaitingRelease ─────────▶ Idle (Released)
//!                        │  sense high, polls < budget
//!                        └──▶ (stay, polls += 1)
//!                        │  polls == budget
//!                        └─────────────────────────▶ Idle (TimedOut)
//! ```
//!
//! [`ReleaseDebounce::block_until_released`] is the only blocking call in
//! the panel. It runs in interrupt context and stalls every other panel
//! edge (rotation included) until the key is let go or the budget runs out.
//! [`ReleaseDebounce::block_until_released_with`] takes the sample as a
//! closure, so a caller keeping the panel behind a lock can take the lock
//! per sample and leave interrupts open while it waits between samples.

use embedded_hal::delay::DelayNs;
use leafsupply_hal::InputPin;

/// Release wait gave up with the sense line still asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReleaseTimeout {
    /// Polls spent waiting
    pub polls: u16,
}

/// Debouncer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReleaseState {
    /// Not waiting
    Idle,
    /// Waiting for the sense line to drop
    AwaitingRelease {
        /// Asserted samples seen so far
        polls: u16,
    },
}

/// Result of feeding one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReleaseStatus {
    /// Still asserted, budget left
    Pending,
    /// Line dropped after this many asserted samples
    Released(u16),
    /// Budget exhausted
    TimedOut(u16),
}

/// Bounded wait for key release
#[derive(Debug, Clone, Copy)]
pub struct ReleaseDebounce {
    state: ReleaseState,
    poll_us: u32,
    timeout_polls: u16,
}

impl ReleaseDebounce {
    /// Debouncer sampling every `poll_us` for at most `timeout_polls` samples
    pub const fn new(poll_us: u32, timeout_polls: u16) -> Self {
        Self {
            state: ReleaseState::Idle,
            poll_us,
            timeout_polls,
        }
    }

    /// Current state
    pub fn state(&self) -> ReleaseState {
        self.state
    }

    /// Start waiting
    pub fn arm(&mut self) {
        self.state = ReleaseState::AwaitingRelease { polls: 0 };
    }

    /// Feed one sense-line sample
    ///
    /// Sampling while idle reports an immediate release.
    pub fn poll(&mut self, asserted: bool) -> ReleaseStatus {
        let ReleaseState::AwaitingRelease { polls } = self.state else {
            return ReleaseStatus::Released(0);
        };

        if !asserted {
            self.state = ReleaseState::Idle;
            return ReleaseStatus::Released(polls);
        }

        let polls = polls.saturating_add(1);
        if polls >= self.timeout_polls {
            self.state = ReleaseState::Idle;
            return ReleaseStatus::TimedOut(polls);
        }

        self.state = ReleaseState::AwaitingRelease { polls };
        ReleaseStatus::Pending
    }

    /// Block until `sense` reads low or the poll budget runs out
    ///
    /// Returns the number of asserted samples seen before release.
    pub fn block_until_released<S, D>(
        &mut self,
        sense: &S,
        delay: &mut D,
    ) -> Result<u16, ReleaseTimeout>
    where
        S: InputPin,
        D: DelayNs,
    {
        self.block_until_released_with(|| sense.is_high(), delay)
    }

    /// Block until `asserted` returns false or the poll budget runs out
    ///
    /// `asserted` is called once per poll; `delay` only runs between calls.
    pub fn block_until_released_with<F, D>(
        &mut self,
        mut asserted: F,
        delay: &mut D,
    ) -> Result<u16, ReleaseTimeout>
    where
        F: FnMut() -> bool,
        D: DelayNs,
    {
        self.arm();
        loop {
            match self.poll(asserted()) {
                ReleaseStatus::Pending => delay.delay_us(self.poll_us),
                ReleaseStatus::Released(polls) => return Ok(polls),
                ReleaseStatus::TimedOut(polls) => return Err(ReleaseTimeout { polls }),
            }
        }
    }
}
