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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Step-driven animation engine for an attack-lifecycle explainer diagram.
//!
//! breachboard plays a fixed seven-step security narrative: an attacker
//! discovers a zero-day, breaches the infrastructure row, a runtime sensor
//! detects the attack, the SOC triages and contains it, and the attacker
//! fades out. Each step runs a scripted program of growing lines, opacity
//! fades, and scale pulses over a shared scene that a host-supplied render
//! surface paints every frame.
//!
//! # Key entry points
//!
//! - [`controller::StepController`] - navigation and the per-frame drive
//! - [`scene::SceneState`] - the animatable fields a surface reads
//! - [`animation::timing::Timing`] - pacing configuration with TOML
//!   presets
//! - [`render::RenderSurface`] - the drawing capability a host supplies
//!
//! # Architecture
//!
//! Step programs are data: typed phase lists (delay, ramp, timed ramp,
//! instantaneous effect) built per step and interpreted by one generic
//! runner. The controller tears the previous program down before starting
//! the next, so a cancelled phase can never touch the scene again. The
//! host drives everything by calling `tick` once per rendering frame with
//! an explicit instant, which keeps every timing property testable.

pub mod animation;
pub mod controller;
pub mod error;
pub mod render;
pub mod scene;
pub mod script;
