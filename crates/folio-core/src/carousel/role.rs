use serde::Serialize;

/// Position of a card relative to the active one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardRole {
    FarLeft,
    Left,
    Center,
    Right,
    FarRight,
}

/// Presentation constants for a role
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPose {
    /// Horizontal offset from the carousel center, in layout units
    pub x_offset: f64,
    pub opacity: f64,
    pub scale: f64,
    /// Y-axis tilt in degrees
    pub rotate_y: f64,
    /// Stacking order, higher is drawn on top
    pub z_index: u8,
    pub visible: bool,
    /// Whether the card reacts to clicks
    pub interactive: bool,
}

impl CardRole {
    pub fn as_str(self) -> &'static str {
        match self {
            CardRole::FarLeft => "far-left",
            CardRole::Left => "left",
            CardRole::Center => "center",
            CardRole::Right => "right",
            CardRole::FarRight => "far-right",
        }
    }

    /// Left, center and right cards are on stage
    pub fn is_on_stage(self) -> bool {
        matches!(self, CardRole::Left | CardRole::Center | CardRole::Right)
    }

    pub fn pose(self, compact: bool) -> CardPose {
        let (wide_x, compact_x, opacity, scale, rotate_y, z_index) = match self {
            CardRole::FarLeft => (-450.0, -120.0, 0.0, 0.7, 0.0, 10),
            CardRole::Left => (-220.0, -70.0, 0.6, 0.85, 15.0, 20),
            CardRole::Center => (0.0, 0.0, 1.0, 1.0, 0.0, 30),
            CardRole::Right => (220.0, 70.0, 0.6, 0.85, -15.0, 20),
            CardRole::FarRight => (450.0, 120.0, 0.0, 0.7, 0.0, 10),
        };

        CardPose {
            x_offset: if compact { compact_x } else { wide_x },
            opacity,
            scale,
            rotate_y,
            z_index,
            visible: self.is_on_stage(),
            interactive: self.is_on_stage(),
        }
    }
}

impl std::fmt::Display for CardRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
