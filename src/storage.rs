use crate::errors::AppResult;
use crate::model::{PlacedPlant, PlantId};
use serde::Deserialize;
use std::cell::{Cell, RefCell};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::rc::Rc;

/// Persistence shim for placed plants.
pub trait PlantStore {
    fn load(&self) -> AppResult<Vec<PlacedPlant>>;
    fn save(&mut self, plants: &[PlacedPlant]) -> AppResult<()>;
}

// On-disk record; older map data files carry no ids.
#[derive(Deserialize)]
struct StoredPlant {
    #[serde(default)]
    id: Option<PlantId>,
    name: String,
    #[serde(default)]
    botanical: String,
    #[serde(default)]
    emoji: String,
    x: f64,
    y: f64,
    #[serde(default)]
    diameter: f64,
    #[serde(default)]
    height: Option<f64>,
    #[serde(default)]
    radius: f64,
}

impl From<StoredPlant> for PlacedPlant {
    fn from(stored: StoredPlant) -> Self {
        PlacedPlant {
            id: stored.id.unwrap_or_else(PlantId::generate),
            name: stored.name,
            botanical: stored.botanical,
            emoji: stored.emoji,
            x: stored.x,
            y: stored.y,
            diameter: stored.diameter,
            height: stored.height,
            radius: stored.radius,
        }
    }
}

// --- JSON file store ---

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PlantStore for JsonFileStore {
    /// A missing file is an empty map.
    fn load(&self) -> AppResult<Vec<PlacedPlant>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let stored: Vec<StoredPlant> = serde_json::from_reader(BufReader::new(file))?;
        Ok(stored.into_iter().map(PlacedPlant::from).collect())
    }

    fn save(&mut self, plants: &[PlacedPlant]) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, plants)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

// --- In-memory store ---

/// Store backed by shared memory. Clones share the same records, so a host can keep
/// a handle to observe what the controller saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Rc<RefCell<Vec<PlacedPlant>>>,
    saves: Rc<Cell<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plants(plants: Vec<PlacedPlant>) -> Self {
        let store = Self::default();
        *store.records.borrow_mut() = plants;
        store
    }

    pub fn records(&self) -> Vec<PlacedPlant> {
        self.records.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl PlantStore for MemoryStore {
    fn load(&self) -> AppResult<Vec<PlacedPlant>> {
        Ok(self.records.borrow().clone())
    }

    fn save(&mut self, plants: &[PlacedPlant]) -> AppResult<()> {
        *self.records.borrow_mut() = plants.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
