use crate::model::PlantId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    Placed,
    Selected,
    /// Added during the current add session and still revocable by cancel.
    SessionAddition,
    MarkedForDeletion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: PlantId,
    pub name: String,
    pub emoji: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub style: MarkerStyle,
}

impl Marker {
    pub fn left(&self) -> f64 {
        self.x - self.radius
    }

    pub fn top(&self) -> f64 {
        self.y - self.radius
    }

    pub fn size(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Which toolbar groups the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Plant picker plus the add/edit/delete buttons.
    pub primary: bool,
    pub confirm_cancel: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    Crosshair,
    Move,
}

/// Everything a rendering backend needs to draw the map for the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub mode: &'static str,
    pub markers: Vec<Marker>,
    pub selected: Option<PlantId>,
    pub controls: Controls,
    pub cursor: CursorStyle,
}

impl RenderSnapshot {
    pub fn marker(&self, id: &PlantId) -> Option<&Marker> {
        self.markers.iter().find(|m| &m.id == id)
    }

    pub fn count_with_style(&self, style: MarkerStyle) -> usize {
        self.markers.iter().filter(|m| m.style == style).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_box_is_centered_on_position() {
        let marker = Marker {
            id: PlantId::new("a"),
            name: "Cacao".to_string(),
            emoji: "🍫".to_string(),
            x: 100.0,
            y: 60.0,
            radius: 20.0,
            style: MarkerStyle::Placed,
        };
        assert_eq!(marker.left(), 80.0);
        assert_eq!(marker.top(), 40.0);
        assert_eq!(marker.size(), 40.0);
    }
}
