//! Image stub processor.
//!
//! A placeholder detector meant to be spawned as a subprocess: it takes an
//! image path, checks that the file opens as an image, and prints a fixed
//! detection payload (or an error payload) as one line of JSON on stdout.
//!
//! # Module Structure
//!
//! - `detect`: detector backend trait, registry, and the stub backend
//! - `processor`: header-only open + detect, collapsing every failure into an error payload
//! - `payload`: the two JSON output shapes
//! - `config`: backend selection from a config file and environment

pub mod config;
pub mod detect;
pub mod payload;
pub mod processor;

pub use config::ProcessorConfig;
pub use detect::{BackendRegistry, DetectionResult, DetectorBackend, ImageInfo, StubBackend};
pub use payload::{DetectionPayload, ErrorPayload, Payload};
pub use processor::{open_image, process_image, ImageProcessor};
