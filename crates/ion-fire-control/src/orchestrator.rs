//! Attack orchestrator — scan in, cannon fired, result out.
//!
//! Steps: normalize the scan, select a target, reserve a cannon, fire it.
//! A reserved cannon is never handed back when firing fails; it keeps
//! cooling down.

use std::sync::Arc;

use ion_core::commands::AttackRequest;
use ion_core::error::IonError;
use ion_core::types::{AttackResult, Coordinates, FireReport};
use ion_targeting::{parse_scan, select_target, ParsedScan};

use crate::fire::{FireAction, SimulatedCannonBattery};
use crate::registry::ResourceRegistry;
use crate::scheduler::AvailabilityScheduler;

pub struct AttackOrchestrator {
    scheduler: Arc<AvailabilityScheduler>,
    fire: Arc<dyn FireAction>,
}

impl AttackOrchestrator {
    pub fn new(scheduler: Arc<AvailabilityScheduler>, fire: Arc<dyn FireAction>) -> Self {
        Self { scheduler, fire }
    }

    /// Orchestrator over a fresh scheduler and a seeded simulated battery.
    pub fn simulated(registry: ResourceRegistry, seed: u64) -> Self {
        let scheduler = Arc::new(AvailabilityScheduler::new(Arc::new(registry)));
        Self::new(scheduler, Arc::new(SimulatedCannonBattery::new(seed)))
    }

    pub fn scheduler(&self) -> &Arc<AvailabilityScheduler> {
        &self.scheduler
    }

    /// Run one attack end to end.
    pub async fn execute_attack(&self, request: AttackRequest) -> Result<AttackResult, IonError> {
        let ParsedScan { protocols, points } = parse_scan(request)?;
        let target = select_target(&points, &protocols)?;
        let cannon_id = self.scheduler.reserve()?;

        let report = self.fire_reserved(&cannon_id, target.coordinates()).await?;

        tracing::info!(
            cannon_id = %cannon_id,
            x = target.x,
            y = target.y,
            casualties = report.casualties,
            generation = report.generation,
            "attack complete"
        );

        Ok(AttackResult {
            target,
            resource_id: cannon_id,
            casualties: report.casualties,
            generation: report.generation,
        })
    }

    /// Fire one named cannon directly at `target`.
    pub async fn fire_cannon(&self, id: &str, target: Coordinates) -> Result<FireReport, IonError> {
        let cannon_id = self.scheduler.reserve_specific(id)?;
        let report = self.fire_reserved(&cannon_id, target).await?;
        tracing::info!(
            cannon_id = %cannon_id,
            casualties = report.casualties,
            "direct fire complete"
        );
        Ok(report)
    }

    async fn fire_reserved(&self, id: &str, target: Coordinates) -> Result<FireReport, IonError> {
        let resource = self
            .scheduler
            .registry()
            .get(id)
            .ok_or_else(|| IonError::ResourceNotFound(id.to_string()))?;

        self.fire
            .fire(resource, &target)
            .await
            .map_err(|source| {
                tracing::warn!(cannon_id = %id, error = %source, "fire action failed");
                IonError::FireActionFailed {
                    cannon_id: id.to_string(),
                    source: Box::new(source),
                }
            })
    }
}
