use orchard_map::catalog::{Catalog, CatalogEntry, Measure};
use orchard_map::geometry::MapScale;
use orchard_map::{MapEditController, MemoryStore, PlacedPlant, PlantId};

/// Default farm scale: 455 x 125 ft on a 910 x 250 px canvas.
pub fn farm_scale() -> MapScale {
    MapScale::from_footprint(455.0, 125.0, 910.0, 250.0, 8.0, 50.0)
}

pub fn apple_banana() -> CatalogEntry {
    let mut entry = CatalogEntry::new("Apple Banana", "bananas");
    entry.botanical = "Musa acuminata".to_string();
    entry.diameter = Some(Measure::Number(8.0));
    entry.emoji = Some("🍌".to_string());
    entry
}

#[allow(dead_code)]
pub fn test_catalog() -> Catalog {
    let mut lime = CatalogEntry::new("Key Lime", "citrus");
    lime.botanical = "Citrus aurantiifolia".to_string();
    lime.height = Some(Measure::Text("6-10 ft".to_string()));

    let mut cacao = CatalogEntry::new("Cacao", "theobroma");
    cacao.botanical = "Theobroma cacao".to_string();

    Catalog::new(vec![apple_banana(), lime, cacao])
}

/// A placed plant with a fixed id, sized for the default scale.
pub fn placed(id: &str, name: &str, x: f64, y: f64, diameter: f64) -> PlacedPlant {
    PlacedPlant {
        id: PlantId::new(id),
        name: name.to_string(),
        botanical: String::new(),
        emoji: "🌱".to_string(),
        x,
        y,
        diameter,
        height: None,
        radius: farm_scale().radius_for(diameter),
    }
}

/// Controller over an in-memory store pre-filled with `plants`.
pub fn controller_with(plants: Vec<PlacedPlant>) -> (MapEditController, MemoryStore) {
    let store = MemoryStore::with_plants(plants);
    let controller = MapEditController::new(farm_scale(), Box::new(store.clone()))
        .expect("memory store loads");
    (controller, store)
}

/// Three plants well apart from each other.
#[allow(dead_code)]
pub fn sample_orchard() -> (MapEditController, MemoryStore) {
    controller_with(vec![
        placed("plant_a", "Key Lime", 100.0, 100.0, 15.0),
        placed("plant_b", "Cacao", 300.0, 120.0, 20.0),
        placed("plant_c", "Apple Banana", 600.0, 200.0, 8.0),
    ])
}

/// Presses at `from`, drags to `to` and releases.
#[allow(dead_code)]
pub fn drag(controller: &mut MapEditController, from: (f64, f64), to: (f64, f64)) -> bool {
    if !controller.handle_pointer_down(from.0, from.1) {
        return false;
    }
    controller.handle_pointer_move(to.0, to.1);
    controller.handle_pointer_up();
    true
}

#[allow(dead_code)]
pub fn positions(controller: &MapEditController) -> Vec<(String, f64, f64)> {
    controller
        .plants()
        .iter()
        .map(|p| (p.id.to_string(), p.x, p.y))
        .collect()
}
