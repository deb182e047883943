use crate::errors::{AppError, AppResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a marker placed on the map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(String);

impl PlantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn generate() -> Self {
        Self(format!("plant_{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A plant marker placed on the farm map.
///
/// `x`/`y` are canvas pixels of the marker centre, `diameter`/`height` are feet
/// and `radius` is the on-canvas radius derived from the diameter and map scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPlant {
    pub id: PlantId,
    pub name: String,
    #[serde(default)]
    pub botanical: String,
    pub emoji: String,
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub radius: f64,
}

impl PlacedPlant {
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Insertion-ordered collection of placed plants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlantCollection {
    plants: Vec<PlacedPlant>,
}

impl PlantCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from stored records. Ids must be unique, so a later
    /// record reusing an id is kept under a freshly generated one.
    pub fn from_plants(mut plants: Vec<PlacedPlant>) -> Self {
        let mut seen = HashSet::new();
        for plant in &mut plants {
            if !seen.insert(plant.id.clone()) {
                let fresh = PlantId::generate();
                warn!("Duplicate plant id {} for {}, using {}", plant.id, plant.name, fresh);
                plant.id = fresh.clone();
                seen.insert(fresh);
            }
        }
        Self { plants }
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedPlant> {
        self.plants.iter()
    }

    pub fn as_slice(&self) -> &[PlacedPlant] {
        &self.plants
    }

    pub fn contains(&self, id: &PlantId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: &PlantId) -> Option<&PlacedPlant> {
        self.plants.iter().find(|p| &p.id == id)
    }

    pub fn get_mut(&mut self, id: &PlantId) -> Option<&mut PlacedPlant> {
        self.plants.iter_mut().find(|p| &p.id == id)
    }

    /// Appends a plant, replacing any existing plant with the same id in place.
    pub fn insert(&mut self, plant: PlacedPlant) {
        match self.get_mut(&plant.id) {
            Some(existing) => *existing = plant,
            None => self.plants.push(plant),
        }
    }

    pub fn remove(&mut self, id: &PlantId) -> Option<PlacedPlant> {
        let index = self.plants.iter().position(|p| &p.id == id)?;
        Some(self.plants.remove(index))
    }

    pub fn move_to(&mut self, id: &PlantId, x: f64, y: f64) -> AppResult<()> {
        let plant = self
            .get_mut(id)
            .ok_or_else(|| AppError::PlantNotFound(id.clone()))?;
        plant.x = x;
        plant.y = y;
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&PlacedPlant> {
        self.plants.iter().find(|p| p.name == name)
    }
}
