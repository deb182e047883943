use crate::catalog::{self, Catalog, CatalogEntry, DEFAULT_DIAMETER_FEET, DEFAULT_EMOJI};
use crate::errors::AppResult;
use crate::geometry::{self, MapScale};
use crate::model::{PlacedPlant, PlantCollection, PlantId};
use crate::snapshot::{Controls, CursorStyle, Marker, MarkerStyle, RenderSnapshot};
use crate::storage::PlantStore;
use log::{debug, error, info, warn};
use std::collections::{HashMap, HashSet};

pub const NO_PLANT_SELECTED: &str = "Please select a plant to add first";

/// State carried while placing new plants.
#[derive(Debug, Clone, PartialEq)]
pub struct AddSession {
    pub entry: CatalogEntry,
    pub diameter_override: Option<f64>,
    /// Plants committed during this session, in creation order. Cancel removes them.
    pub additions: Vec<PlantId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapMode {
    Normal,
    Add(AddSession),
    /// Positions at the moment edit mode was entered.
    Edit {
        snapshot: HashMap<PlantId, (f64, f64)>,
    },
    Delete {
        marks: HashSet<PlantId>,
    },
}

impl MapMode {
    pub fn name(&self) -> &'static str {
        match self {
            MapMode::Normal => "normal",
            MapMode::Add(_) => "add",
            MapMode::Edit { .. } => "edit",
            MapMode::Delete { .. } => "delete",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, MapMode::Normal)
    }
}

/// Messages for the host: things the controller cannot present itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
    ShowDetail { name: String },
}

/// Owns the placed plants and the add/edit/delete editing workflow.
///
/// Every transition returns `true` when it changed state and `false` when it was
/// rejected or had nothing to do. Rejections never error.
pub struct MapEditController {
    mode: MapMode,
    selected: Option<PlantId>,
    plants: PlantCollection,
    dragging: bool,
    scale: MapScale,
    store: Box<dyn PlantStore>,
    notices: Vec<Notice>,
}

impl MapEditController {
    pub fn new(scale: MapScale, store: Box<dyn PlantStore>) -> AppResult<Self> {
        let plants = store
            .load()?
            .into_iter()
            .map(|plant| normalize(plant, &scale))
            .collect();
        let plants = PlantCollection::from_plants(plants);
        info!("Loaded {} placed plants", plants.len());

        Ok(Self {
            mode: MapMode::Normal,
            selected: None,
            plants,
            dragging: false,
            scale,
            store,
            notices: Vec::new(),
        })
    }

    // --- Accessors ---

    pub fn mode(&self) -> &MapMode {
        &self.mode
    }

    pub fn selected(&self) -> Option<&PlantId> {
        self.selected.as_ref()
    }

    pub fn selected_plant(&self) -> Option<&PlacedPlant> {
        self.selected.as_ref().and_then(|id| self.plants.get(id))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn plants(&self) -> &PlantCollection {
        &self.plants
    }

    pub fn plant(&self, id: &PlantId) -> Option<&PlacedPlant> {
        self.plants.get(id)
    }

    pub fn scale(&self) -> &MapScale {
        &self.scale
    }

    pub fn session_additions(&self) -> &[PlantId] {
        match &self.mode {
            MapMode::Add(session) => session.additions.as_slice(),
            _ => &[],
        }
    }

    pub fn is_marked(&self, id: &PlantId) -> bool {
        matches!(&self.mode, MapMode::Delete { marks } if marks.contains(id))
    }

    pub fn marked_count(&self) -> usize {
        match &self.mode {
            MapMode::Delete { marks } => marks.len(),
            _ => 0,
        }
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // --- Mode entry ---

    pub fn enter_add_mode(
        &mut self,
        entry: Option<&CatalogEntry>,
        diameter_override: Option<f64>,
    ) -> bool {
        if !self.mode.is_normal() {
            debug!("Add mode rejected while in {} mode", self.mode.name());
            return false;
        }
        let Some(entry) = entry else {
            self.alert(NO_PLANT_SELECTED);
            return false;
        };

        let diameter_override = diameter_override.filter(|d| d.is_finite() && *d > 0.0);
        self.dragging = false;
        self.mode = MapMode::Add(AddSession {
            entry: entry.clone(),
            diameter_override,
            additions: Vec::new(),
        });
        info!("Add mode entered for {}", entry.name);
        true
    }

    /// Enters add mode for the catalog entry with the given name.
    pub fn enter_add_mode_for(
        &mut self,
        catalog: &Catalog,
        name: Option<&str>,
        diameter_override: Option<f64>,
    ) -> bool {
        if !self.mode.is_normal() {
            debug!("Add mode rejected while in {} mode", self.mode.name());
            return false;
        }
        let Some(name) = name.filter(|n| !n.is_empty()) else {
            self.alert(NO_PLANT_SELECTED);
            return false;
        };
        match catalog.find(name) {
            Some(entry) => self.enter_add_mode(Some(entry), diameter_override),
            None => {
                warn!("Plant {} not found in catalog, add mode aborted", name);
                false
            }
        }
    }

    pub fn enter_edit_mode(&mut self) -> bool {
        if !self.mode.is_normal() {
            debug!("Edit mode rejected while in {} mode", self.mode.name());
            return false;
        }
        let snapshot = self
            .plants
            .iter()
            .map(|p| (p.id.clone(), p.position()))
            .collect();
        self.dragging = false;
        self.mode = MapMode::Edit { snapshot };
        info!("Edit mode entered");
        true
    }

    pub fn enter_delete_mode(&mut self) -> bool {
        if !self.mode.is_normal() {
            debug!("Delete mode rejected while in {} mode", self.mode.name());
            return false;
        }
        self.selected = None;
        self.dragging = false;
        self.mode = MapMode::Delete {
            marks: HashSet::new(),
        };
        info!("Delete mode entered");
        true
    }

    // --- Pointer input ---

    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> bool {
        if !matches!(self.mode, MapMode::Add(_) | MapMode::Edit { .. }) {
            return false;
        }
        let Some(id) = geometry::hit_test(self.plants.iter(), x, y).map(|p| p.id.clone()) else {
            return false;
        };
        debug!("Drag started on {}", id);
        self.selected = Some(id);
        self.dragging = true;
        true
    }

    /// Moves the dragged plant to the pointer. Positions are not clamped to the canvas.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(id) = self.selected.clone() else {
            self.dragging = false;
            return false;
        };
        match self.plants.move_to(&id, x, y) {
            Ok(()) => true,
            Err(e) => {
                warn!("Drag ended: {}", e);
                self.dragging = false;
                false
            }
        }
    }

    /// Ends a drag. In add mode the moved plant is saved; a release with no drag
    /// saves nothing, since a plain click already saved through placement.
    pub fn handle_pointer_up(&mut self) -> bool {
        if !std::mem::replace(&mut self.dragging, false) {
            return false;
        }
        if let Some(plant) = self.selected_plant() {
            if !self.scale.contains(plant.x, plant.y) {
                debug!(
                    "{} released outside the map at ({:.0}, {:.0})",
                    plant.name, plant.x, plant.y
                );
            }
        }
        // Placements made in add mode are already committed, so moves are too.
        if matches!(self.mode, MapMode::Add(_)) {
            self.persist();
        }
        true
    }

    pub fn handle_canvas_click(&mut self, x: f64, y: f64) -> bool {
        let hit = geometry::hit_test(self.plants.iter(), x, y).map(|p| (p.id.clone(), p.name.clone()));
        match self.mode {
            MapMode::Normal => match hit {
                Some((id, name)) if self.selected.as_ref() == Some(&id) => {
                    debug!("Opening detail for {}", name);
                    self.notices.push(Notice::ShowDetail { name });
                    true
                }
                Some((id, _)) => self.select(&id),
                None => self.deselect(),
            },
            MapMode::Add(_) => match hit {
                Some((id, _)) => self.select(&id),
                None => self.place_plant(x, y),
            },
            MapMode::Edit { .. } => match hit {
                Some((id, _)) => self.select(&id),
                None => self.deselect(),
            },
            MapMode::Delete { .. } => match hit {
                Some((id, name)) => self.toggle_mark(id, &name),
                None => false,
            },
        }
    }

    // --- Selection ---

    pub fn select(&mut self, id: &PlantId) -> bool {
        if !self.plants.contains(id) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    pub fn deselect(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Follows the plant picker: an empty name deselects, otherwise an existing
    /// selection in normal mode moves to the first placed plant with that name.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return self.deselect();
        }
        if !self.mode.is_normal() || self.selected.is_none() {
            return false;
        }
        match self.plants.find_by_name(name).map(|p| p.id.clone()) {
            Some(id) => self.select(&id),
            None => false,
        }
    }

    // --- Confirm / cancel ---

    pub fn confirm(&mut self) -> bool {
        match std::mem::replace(&mut self.mode, MapMode::Normal) {
            MapMode::Normal => {
                debug!("Confirm ignored in normal mode");
                return false;
            }
            MapMode::Add(session) => {
                info!(
                    "Add session confirmed with {} new plants",
                    session.additions.len()
                );
            }
            MapMode::Edit { .. } => {
                info!("Edit session confirmed");
                self.persist();
            }
            MapMode::Delete { marks } => {
                for id in &marks {
                    if let Some(plant) = self.plants.remove(id) {
                        info!("Deleted {} ({})", plant.name, id);
                    }
                }
                self.persist();
            }
        }
        self.reset_interaction();
        true
    }

    pub fn cancel(&mut self) -> bool {
        match std::mem::replace(&mut self.mode, MapMode::Normal) {
            MapMode::Normal => return false,
            MapMode::Add(session) => {
                for id in &session.additions {
                    self.plants.remove(id);
                }
                info!(
                    "Add session cancelled, rolled back {} plants",
                    session.additions.len()
                );
                self.persist();
            }
            MapMode::Edit { snapshot } => {
                for (id, (x, y)) in snapshot {
                    if let Some(plant) = self.plants.get_mut(&id) {
                        plant.x = x;
                        plant.y = y;
                    }
                }
                info!("Edit session cancelled, positions restored");
            }
            MapMode::Delete { marks } => {
                info!("Delete session cancelled, {} marks discarded", marks.len());
            }
        }
        self.reset_interaction();
        true
    }

    // --- Presentation ---

    pub fn controls(&self) -> Controls {
        let primary = self.mode.is_normal();
        Controls {
            primary,
            confirm_cancel: !primary,
        }
    }

    pub fn cursor(&self) -> CursorStyle {
        match self.mode {
            MapMode::Normal => CursorStyle::Default,
            MapMode::Add(_) | MapMode::Delete { .. } => CursorStyle::Crosshair,
            MapMode::Edit { .. } => CursorStyle::Move,
        }
    }

    /// Unmarked plants first, then plants marked for deletion.
    pub fn snapshot(&self) -> RenderSnapshot {
        let additions = self.session_additions();
        let marker = |plant: &PlacedPlant, style: MarkerStyle| Marker {
            id: plant.id.clone(),
            name: plant.name.clone(),
            emoji: plant.emoji.clone(),
            x: plant.x,
            y: plant.y,
            radius: plant.radius,
            style,
        };

        let mut markers: Vec<Marker> = self
            .plants
            .iter()
            .filter(|p| !self.is_marked(&p.id))
            .map(|p| {
                let style = if self.selected.as_ref() == Some(&p.id) {
                    MarkerStyle::Selected
                } else if additions.contains(&p.id) {
                    MarkerStyle::SessionAddition
                } else {
                    MarkerStyle::Placed
                };
                marker(p, style)
            })
            .collect();
        markers.extend(
            self.plants
                .iter()
                .filter(|p| self.is_marked(&p.id))
                .map(|p| marker(p, MarkerStyle::MarkedForDeletion)),
        );

        RenderSnapshot {
            mode: self.mode.name(),
            markers,
            selected: self.selected.clone(),
            controls: self.controls(),
            cursor: self.cursor(),
        }
    }

    // --- Internals ---

    fn place_plant(&mut self, x: f64, y: f64) -> bool {
        let MapMode::Add(session) = &self.mode else {
            return false;
        };
        let entry = &session.entry;
        let diameter = session
            .diameter_override
            .unwrap_or_else(|| catalog::diameter_feet(entry));
        let plant = PlacedPlant {
            id: PlantId::generate(),
            name: entry.name.clone(),
            botanical: entry.botanical.clone(),
            emoji: catalog::emoji_for(entry),
            x,
            y,
            diameter,
            height: entry.height_feet(),
            radius: self.scale.radius_for(diameter),
        };
        info!("Placed {} at ({:.0}, {:.0})", plant.name, x, y);

        let id = plant.id.clone();
        self.plants.insert(plant);
        if let MapMode::Add(session) = &mut self.mode {
            session.additions.push(id);
        }
        self.persist();
        true
    }

    fn toggle_mark(&mut self, id: PlantId, name: &str) -> bool {
        let MapMode::Delete { marks } = &mut self.mode else {
            return false;
        };
        if marks.remove(&id) {
            debug!("Unmarked {} for deletion", name);
        } else {
            debug!("Marked {} for deletion", name);
            marks.insert(id);
        }
        true
    }

    fn reset_interaction(&mut self) {
        self.selected = None;
        self.dragging = false;
    }

    fn persist(&mut self) {
        match self.store.save(self.plants.as_slice()) {
            Ok(()) => debug!("Saved {} plant placements", self.plants.len()),
            Err(e) => {
                error!("Failed to save plant placements: {}", e);
                self.alert(format!("Failed to save map: {}", e));
            }
        }
    }

    fn alert(&mut self, message: impl Into<String>) {
        self.notices.push(Notice::Alert(message.into()));
    }
}

// Stored records may predate the current scale or lack an emoji.
fn normalize(mut plant: PlacedPlant, scale: &MapScale) -> PlacedPlant {
    if plant.diameter <= 0.0 && plant.radius <= 0.0 {
        plant.diameter = DEFAULT_DIAMETER_FEET;
    }
    if plant.diameter > 0.0 {
        plant.radius = scale.radius_for(plant.diameter);
    }
    if plant.emoji.is_empty() {
        plant.emoji = DEFAULT_EMOJI.to_string();
    }
    plant
}
