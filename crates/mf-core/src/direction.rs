use std::fmt;

/// Label on a topology edge. Every direction has an opposite, used to mirror
/// two-way exits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Up,
    Down,
    Inside,
    Outside,
    /// A direction supplied by game content, e.g. "widdershins".
    Custom {
        /// Name used in menus.
        name: String,
        /// Name of the way back.
        opposite: String,
    },
}

impl Direction {
    /// Parse a direction from its name or abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "ne" | "northeast" => Some(Self::NorthEast),
            "e" | "east" => Some(Self::East),
            "se" | "southeast" => Some(Self::SouthEast),
            "s" | "south" => Some(Self::South),
            "sw" | "southwest" => Some(Self::SouthWest),
            "w" | "west" => Some(Self::West),
            "nw" | "northwest" => Some(Self::NorthWest),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            "in" | "inside" => Some(Self::Inside),
            "out" | "outside" => Some(Self::Outside),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &str {
        match self {
            Self::North => "north",
            Self::NorthEast => "northeast",
            Self::East => "east",
            Self::SouthEast => "southeast",
            Self::South => "south",
            Self::SouthWest => "southwest",
            Self::West => "west",
            Self::NorthWest => "northwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Custom { name, .. } => name,
        }
    }

    /// The direction leading back.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Inside => Self::Outside,
            Self::Outside => Self::Inside,
            Self::Custom { name, opposite } => Self::Custom {
                name: opposite.clone(),
                opposite: name.clone(),
            },
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
