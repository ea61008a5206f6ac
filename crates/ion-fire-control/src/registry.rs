//! Static cannon catalog.
//!
//! Loaded once at startup from TOML or the built-in defaults and never
//! mutated afterwards. Iteration is in ascending id order, which is also
//! the scheduler's reservation order.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::time::Duration;

use serde::Deserialize;

use ion_core::commands::CatalogEntry;
use ion_core::constants::DEFAULT_CATALOG;
use ion_core::error::IonError;
use ion_core::state::CannonView;
use ion_core::types::Resource;

/// TOML layout: one `[[cannon]]` table per entry.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "cannon", default)]
    cannons: Vec<CatalogEntry>,
}

/// The set of cannons known to the service.
#[derive(Debug, Clone)]
pub struct ResourceRegistry {
    resources: BTreeMap<String, Resource>,
}

impl ResourceRegistry {
    /// Build from catalog entries. Ids must be unique, `fire_time` a
    /// non-negative number of seconds that fits a `Duration`, `generation`
    /// at least 1.
    pub fn from_catalog(
        entries: impl IntoIterator<Item = CatalogEntry>,
    ) -> Result<Self, IonError> {
        let mut resources = BTreeMap::new();
        for entry in entries {
            if entry.id.is_empty() {
                return Err(IonError::InvalidCatalog("cannon id is empty".into()));
            }
            let cooldown = Duration::try_from_secs_f64(entry.fire_time).map_err(|_| {
                IonError::InvalidCatalog(format!(
                    "cannon {}: fire_time must be a non-negative number of seconds, got {}",
                    entry.id, entry.fire_time
                ))
            })?;
            if entry.generation == 0 {
                return Err(IonError::InvalidCatalog(format!(
                    "cannon {}: generation must be at least 1",
                    entry.id
                )));
            }
            match resources.entry(entry.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(IonError::InvalidCatalog(format!(
                        "duplicate cannon id {}",
                        entry.id
                    )));
                }
                Entry::Vacant(slot) => {
                    slot.insert(Resource {
                        id: entry.id,
                        cooldown,
                        generation: entry.generation,
                        initially_available: entry.available,
                    });
                }
            }
        }
        Ok(Self { resources })
    }

    /// Parse a TOML catalog.
    ///
    /// ```toml
    /// [[cannon]]
    /// id = "cannon1"
    /// fire_time = 3.5
    /// generation = 1
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, IonError> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|e| IonError::InvalidCatalog(e.to_string()))?;
        Self::from_catalog(file.cannons)
    }

    /// The built-in three-cannon catalog.
    pub fn default_catalog() -> Self {
        let resources = DEFAULT_CATALOG
            .iter()
            .map(|&(id, fire_time_millis, generation)| {
                (
                    id.to_string(),
                    Resource {
                        id: id.to_string(),
                        cooldown: Duration::from_millis(fire_time_millis),
                        generation,
                        initially_available: true,
                    },
                )
            })
            .collect();
        Self { resources }
    }

    pub fn get(&self, id: &str) -> Option<&Resource> {
        self.resources.get(id)
    }

    /// Cannons in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Catalog entry view with the given live availability.
    pub fn view(resource: &Resource, available: bool) -> CannonView {
        CannonView {
            id: resource.id.clone(),
            available,
            fire_time: resource.cooldown.as_secs_f64(),
            generation: resource.generation,
        }
    }
}

impl Default for ResourceRegistry {
    fn default() -> Self {
        Self::default_catalog()
    }
}
