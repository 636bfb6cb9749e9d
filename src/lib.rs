//! Primate Journeys - procedural movement histories for named primates
//!
//! Given an animal's name and home coordinate, the generator resolves a
//! species behavior profile, walks a timestamped path, sprinkles activities
//! along it and draws a health snapshot.

pub mod business;
pub mod core;
pub mod directory;
pub mod journey;
pub mod service;
pub mod species;

pub use crate::core::error::{JourneyError, Result};
pub use crate::core::types::GeoLocation;
pub use directory::{Entity, EntityDirectory, StaticDirectory};
pub use journey::{Activity, HealthStats, Journey, JourneyGenerator, PathPoint};
pub use service::{JourneyOutcome, JourneyRequest, JourneyService};
pub use species::{ActivityTemplate, BehaviorProfile, SpeciesCatalog, Terrain};
