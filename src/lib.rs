// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

//! Scroll-driven 3D phone showcase.
//!
//! Everything the landing page animates is derived here, independent of any
//! browser: a phone model posed from scroll position, three overlay texts
//! faded in and out, and a typewriter cycling through slogans.
//!
//! # Key entry points
//!
//! - [`scroll::derive_visual_state`] - pure mapping from scroll progress to
//!   phone pose and overlay states
//! - [`engine::ShowcaseEngine`] - per-frame driver owning the scene and the
//!   shared progress cell
//! - [`typewriter::TypewriterScript`] / [`typewriter::TypewriterRunner`] -
//!   the typewriter state machine and its scheduler
//! - [`options::Options`] - configuration (typewriter, camera, model)
//!
//! # Architecture
//!
//! A scroll handler stores the normalized progress into a
//! [`scroll::SharedProgress`]; the display-refresh loop calls
//! [`engine::ShowcaseEngine::frame`], which recomputes the whole visual
//! state from that one scalar. The typewriter runs on its own one-shot
//! timers. The `showcase-web` crate binds both loops to the browser.

pub mod engine;
pub mod error;
pub mod options;
pub mod scene;
pub mod scroll;
pub mod typewriter;
pub mod util;
