use crate::model::PlacedPlant;

/// Maps the real-world farm footprint onto the fixed pixel canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapScale {
    pub pixels_per_foot: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl MapScale {
    /// Uses the smaller of the two axis factors so the footprint keeps its aspect ratio.
    pub fn from_footprint(
        map_width_feet: f64,
        map_height_feet: f64,
        canvas_width: f64,
        canvas_height: f64,
        min_radius: f64,
        max_radius: f64,
    ) -> Self {
        let pixels_per_foot = (canvas_width / map_width_feet).min(canvas_height / map_height_feet);
        Self {
            pixels_per_foot,
            canvas_width,
            canvas_height,
            min_radius,
            max_radius,
        }
    }

    /// On-canvas marker radius for a canopy diameter in feet, clamped for legibility.
    pub fn radius_for(&self, diameter_feet: f64) -> f64 {
        let radius = diameter_feet * self.pixels_per_foot / 2.0;
        radius.max(self.min_radius).min(self.max_radius)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.canvas_width).contains(&x) && (0.0..=self.canvas_height).contains(&y)
    }
}

pub fn distance(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (ax - bx).hypot(ay - by)
}

/// True when the point lies within the marker circle, boundary included.
pub fn is_hit(plant: &PlacedPlant, x: f64, y: f64) -> bool {
    distance(plant.x, plant.y, x, y) <= plant.radius
}

/// First plant, in iteration order, whose marker contains the point.
pub fn hit_test<'a, I>(plants: I, x: f64, y: f64) -> Option<&'a PlacedPlant>
where
    I: IntoIterator<Item = &'a PlacedPlant>,
{
    plants.into_iter().find(|p| is_hit(p, x, y))
}
