//! Fire control for the ion cannon service.
//!
//! Owns the cannon catalog, the availability scheduler with its cooldown
//! timers, the fire action seam, and the attack orchestrator that ties
//! target selection to a reserved cannon.

pub mod fire;
pub mod orchestrator;
pub mod registry;
pub mod scheduler;

pub use ion_core as core;
pub use orchestrator::AttackOrchestrator;
pub use registry::ResourceRegistry;
pub use scheduler::AvailabilityScheduler;
