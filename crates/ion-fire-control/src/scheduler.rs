//! Availability scheduler — cannon lockout and cooldown.
//!
//! Each cannon moves `Available --reserve--> CoolingDown --timer--> Available`.
//! The status table sits behind one mutex, so the check for an available
//! cannon and marking it unavailable happen in a single critical section.
//! Cooldown timers are one-shot Tokio tasks keyed by cannon id; `release`
//! aborts the pending timer.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use ion_core::error::IonError;
use ion_core::state::CannonView;
use ion_core::types::{Resource, ResourceId, ResourceStatus};

use crate::registry::ResourceRegistry;

/// Live state of one cannon.
#[derive(Debug)]
struct Slot {
    available: bool,
    /// Bumped on every reserve/release. A timer only flips the slot back if
    /// the epoch it was armed with is still current.
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

type SlotTable = Arc<Mutex<BTreeMap<ResourceId, Slot>>>;

/// Owns cannon availability. Share it behind an `Arc`.
///
/// `reserve`, `reserve_specific` and `release` arm or abort Tokio timers and
/// must be called from within a Tokio runtime.
pub struct AvailabilityScheduler {
    registry: Arc<ResourceRegistry>,
    slots: SlotTable,
}

impl AvailabilityScheduler {
    /// Create a scheduler with every cannon at its catalog default.
    pub fn new(registry: Arc<ResourceRegistry>) -> Self {
        let slots = registry
            .iter()
            .map(|resource| {
                (
                    resource.id.clone(),
                    Slot {
                        available: resource.initially_available,
                        epoch: 0,
                        timer: None,
                    },
                )
            })
            .collect();
        Self {
            registry,
            slots: Arc::new(Mutex::new(slots)),
        }
    }

    pub fn registry(&self) -> &Arc<ResourceRegistry> {
        &self.registry
    }

    /// Reserve the first available cannon in ascending id order and start
    /// its cooldown.
    pub fn reserve(&self) -> Result<ResourceId, IonError> {
        let mut slots = self.slots.lock();
        let (id, slot) = slots
            .iter_mut()
            .find(|(_, slot)| slot.available)
            .ok_or(IonError::NoResourceAvailable)?;
        let resource = self.resource(id)?;
        self.arm_cooldown(resource, slot);
        Ok(id.clone())
    }

    /// Reserve one named cannon and start its cooldown.
    pub fn reserve_specific(&self, id: &str) -> Result<ResourceId, IonError> {
        let mut slots = self.slots.lock();
        let slot = slots
            .get_mut(id)
            .ok_or_else(|| IonError::ResourceNotFound(id.to_string()))?;
        if !slot.available {
            return Err(IonError::ResourceUnavailable(id.to_string()));
        }
        let resource = self.resource(id)?;
        self.arm_cooldown(resource, slot);
        Ok(resource.id.clone())
    }

    /// Make a cannon available immediately, cancelling its cooldown.
    pub fn release(&self, id: &str) -> Result<(), IonError> {
        let mut slots = self.slots.lock();
        let slot = slots
            .get_mut(id)
            .ok_or_else(|| IonError::ResourceNotFound(id.to_string()))?;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.epoch += 1;
        slot.available = true;
        tracing::info!(cannon_id = %id, "cannon released");
        Ok(())
    }

    /// Current availability of one cannon.
    pub fn status(&self, id: &str) -> Result<ResourceStatus, IonError> {
        let resource = self.resource(id)?;
        let slots = self.slots.lock();
        let slot = slots
            .get(id)
            .ok_or_else(|| IonError::ResourceNotFound(id.to_string()))?;
        Ok(ResourceStatus {
            resource_id: resource.id.clone(),
            available: slot.available,
            generation: resource.generation,
        })
    }

    pub fn is_available(&self, id: &str) -> bool {
        self.slots.lock().get(id).is_some_and(|slot| slot.available)
    }

    /// Every cannon with its live availability, in ascending id order.
    pub fn snapshot(&self) -> Vec<CannonView> {
        let slots = self.slots.lock();
        self.registry
            .iter()
            .map(|resource| {
                let available = slots.get(&resource.id).is_some_and(|slot| slot.available);
                ResourceRegistry::view(resource, available)
            })
            .collect()
    }

    fn resource(&self, id: &str) -> Result<&Resource, IonError> {
        self.registry
            .get(id)
            .ok_or_else(|| IonError::ResourceNotFound(id.to_string()))
    }

    /// Mark `slot` unavailable and spawn the timer that frees it again.
    fn arm_cooldown(&self, resource: &Resource, slot: &mut Slot) {
        slot.available = false;
        slot.epoch += 1;
        if let Some(stale) = slot.timer.take() {
            stale.abort();
        }

        let epoch = slot.epoch;
        let cooldown = resource.cooldown;
        let slots = Arc::clone(&self.slots);
        let id = resource.id.clone();

        tracing::debug!(cannon_id = %id, cooldown_secs = cooldown.as_secs_f64(), "cooldown armed");

        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(cooldown).await;
            let mut slots = slots.lock();
            if let Some(slot) = slots.get_mut(&id) {
                if slot.epoch == epoch && !slot.available {
                    slot.available = true;
                    slot.timer = None;
                    tracing::debug!(cannon_id = %id, "cooldown elapsed");
                }
            }
        }));
    }
}

impl Drop for AvailabilityScheduler {
    fn drop(&mut self) {
        for slot in self.slots.lock().values_mut() {
            if let Some(timer) = slot.timer.take() {
                timer.abort();
            }
        }
    }
}
