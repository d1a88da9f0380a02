//! # Site Interactions
//!
//! Client-side behaviour for a single-page real-estate marketing site,
//! compiled to WebAssembly: mobile menu, smooth anchor scrolling, scroll-aware
//! header and scroll-to-top button, toast notifications for the contact and
//! search forms, fade-in on scroll, gallery tilt, count-up statistics, lazy
//! images, and active-section highlighting in the navigation.
//!
//! # Architecture: Decisions Apart From the DOM
//!
//! Every feature is split in two:
//!
//! ```text
//! core module (menu, scroll, notify, ...)   ← pure state + decisions, native tests
//!         ▲
//!         │  dom::Element, schedule::Scheduler, notify::NotificationHost
//!         │
//! web (wasm32 only)                         ← web_sys listeners, observers, timers
//! ```
//!
//! The core never touches `web_sys`. It writes classes, attributes, text and
//! inline styles through the [`dom::Element`] trait and defers work through
//! [`schedule::Scheduler`]. The `web` module implements those traits for the
//! browser; the tests implement them with in-memory fakes and a manual clock,
//! so every invariant (menu classes agree, one notification at a time,
//! counters end exactly on target) is checked with plain `cargo test`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | TOML overlay on stock defaults: thresholds, timings, selectors, branding |
//! | [`dom`] | The element seam and the class/attribute names the page's CSS relies on |
//! | [`schedule`] | Single-shot timers and repeating timer chains |
//! | [`menu`] | Mobile menu open/close state mirrored on three elements |
//! | [`scroll`] | Header `scrolled`, scroll-to-top `visible`, anchor destinations |
//! | [`notify`] | Single-slot toast notifications with timed exit |
//! | [`forms`] | Contact and search submit stubs |
//! | [`viewport`] | Fade-in, stat counters, lazy images (intersection-driven) |
//! | [`parallax`] | Pointer-driven tilt on gallery tiles |
//! | [`nav_highlight`] | Active nav link for the section under the viewport |
//! | [`diagnostics`] | Console banner and page-load timing line |
//! | [`controller`] | Feature inventory and startup activation report |
//! | [`logging`] | `tracing` subscriber for stderr and the browser console |
//! | [`output`] | `check` command summary formatting |
//!
//! # Design Decisions
//!
//! ## Independent Features
//!
//! A page missing `.stats-inline` still gets its menu. Each feature is wired
//! on its own and reports an [`controller::Activation`]; nothing shared fails
//! the whole page. The report is logged once at startup.
//!
//! ## Timer Chains Instead of Intervals
//!
//! Counters tick via [`schedule::repeat`], a chain of single-shot timeouts.
//! A chain stops by not rescheduling, so there is no interval handle for a
//! callback to clear from inside itself.
//!
//! ## Configuration In The Page
//!
//! Thresholds and selectors default to what the stock site needs. A page can
//! override any of them with a TOML block; `site-interactions check` validates
//! the same TOML offline.

pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod dom;
pub mod forms;
pub mod logging;
pub mod menu;
pub mod nav_highlight;
pub mod notify;
pub mod output;
pub mod parallax;
pub mod schedule;
pub mod scroll;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(test)]
pub(crate) mod test_helpers;
