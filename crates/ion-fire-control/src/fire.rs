//! The fire action seam and its simulated implementation.

use async_trait::async_trait;
use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ion_core::constants::{DEFAULT_RNG_SEED, MAX_CASUALTIES, MIN_CASUALTIES};
use ion_core::types::{Coordinates, FireReport, Resource};

/// Failures reported by a fire action.
#[derive(Debug, thiserror::Error)]
pub enum FireError {
    /// The cannon could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The cannon refused the fire order.
    #[error("fire order rejected: {0}")]
    Rejected(String),
}

/// Fires a reserved cannon at a target.
#[async_trait]
pub trait FireAction: Send + Sync + 'static {
    async fn fire(&self, resource: &Resource, target: &Coordinates)
        -> Result<FireReport, FireError>;
}

/// In-process cannon battery. Casualties are drawn uniformly from
/// `MIN_CASUALTIES..=MAX_CASUALTIES` with a seeded RNG, so the same seed
/// gives the same sequence.
pub struct SimulatedCannonBattery {
    rng: Mutex<ChaCha8Rng>,
}

impl SimulatedCannonBattery {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl Default for SimulatedCannonBattery {
    fn default() -> Self {
        Self::new(DEFAULT_RNG_SEED)
    }
}

#[async_trait]
impl FireAction for SimulatedCannonBattery {
    async fn fire(
        &self,
        resource: &Resource,
        target: &Coordinates,
    ) -> Result<FireReport, FireError> {
        let casualties = self.rng.lock().gen_range(MIN_CASUALTIES..=MAX_CASUALTIES);
        tracing::debug!(
            cannon_id = %resource.id,
            x = target.x,
            y = target.y,
            casualties,
            "ion cannon discharged"
        );
        Ok(FireReport {
            casualties,
            generation: resource.generation,
        })
    }
}
