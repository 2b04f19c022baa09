//! # ThrottleKit
//!
//! A small utility toolkit built around a concurrency-safe call throttler.
//!
//! ## Overview
//!
//! The core of the crate is [`Throttler`], a rate-limiting primitive that
//! gates a caller-supplied action so it runs at most once per cooldown
//! window:
//!
//! - **Exactly-once-per-window**: concurrent callers race for a single
//!   acceptance; everyone else is suppressed
//! - **Non-blocking decisions**: the action always runs outside the
//!   critical section, so a slow action never stalls other callers
//! - **Reusable**: [`Throttler::reset`] re-arms the instance immediately
//!
//! The remaining modules are companion utilities that ship with the same
//! toolkit: duration conversions ([`time`]), calendar-date helpers
//! ([`date`]), coordinate math ([`geo`]), and a typed in-memory preference
//! store ([`prefs`]).
//!
//! ## Quick Start
//!
//! ```
//! use throttlekit::Throttler;
//! use std::time::Duration;
//!
//! let throttler = Throttler::new(Duration::from_secs(5));
//! let mut value = 0;
//!
//! throttler.execute(|| value += 1); // runs, returns true
//! throttler.execute(|| value += 1); // suppressed, returns false
//!
//! assert_eq!(value, 1);
//! ```
//!
//! ## Throttling a UI action
//!
//! ```
//! use throttlekit::Throttler;
//! use std::time::Duration;
//!
//! // One throttler per rate-limited operation, alive as long as its owner.
//! let refresh = Throttler::new(Duration::from_secs(10));
//!
//! // Only the first tap inside the window triggers the reload.
//! let reloaded = refresh.execute(|| { /* reload data */ });
//!
//! // A pull-to-refresh gesture bypasses the window entirely.
//! refresh.reset();
//! assert!(refresh.execute(|| { /* reload data */ }));
//! # let _ = reloaded;
//! ```
//!
//! ## Thread Safety
//!
//! [`Throttler`] is `Send + Sync` and is designed to be shared across
//! threads behind an `Arc` (or a `'static` reference). All coordination
//! happens inside the instance; different instances share no state.
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use throttlekit::Throttler;
//!
//! let throttler = Arc::new(Throttler::new(Duration::from_secs(1)));
//! let clone = Arc::clone(&throttler);
//! std::thread::spawn(move || clone.execute(|| println!("tick")));
//! ```
//!
//! ## Deterministic time in tests
//!
//! The throttler reads time through the [`Clock`](core::Clock) trait.
//! Production code uses [`SystemClock`](core::SystemClock); tests can
//! inject a manually advanced clock via [`Throttler::with_clock`] (enable
//! the `test-util` feature to use `ManualClock` from downstream crates).
//!
//! ## Features
//!
//! - `ahash` (default): use AHash for the preference store's backing map
//! - `test-util`: export the manually advanced test clock

pub mod core;
pub mod date;
pub mod geo;
pub mod prefs;
pub mod time;

pub use crate::core::{Clock, SystemClock, Throttler};
pub use date::DateTimeExt;
pub use geo::{Coordinate, CoordinateSliceExt};
pub use prefs::{Preferences, PrefsError};
pub use time::{DurationExt, InstantExt};

#[cfg(feature = "test-util")]
pub use crate::core::ManualClock;
