//! Tile kinds: the closed set of cell states, the solid/ore subsets, and the
//! kind-to-color table consumed by the presentation layer.
//!
//! "Empty" is always [`TileKind::Sky`]; a cell never holds an absent value.

/// An sRGB color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Every state a grid cell can be in.
///
/// `DaylitCave` and `DarkCave` are transient backdrop markers written by the
/// background-lighting pass after a block is broken; they only change how the
/// cell is drawn, never its solidity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Bedrock,
    Stone,
    Diamond,
    Iron,
    Coal,
    Dirt,
    Grass,
    Sky,
    Cave,
    Mountain,
    Snow,
    DaylitCave,
    DarkCave,
}

impl TileKind {
    /// Whether the player collides with this kind.
    ///
    /// Ore, cave, mountain and snow are deliberately excluded: a mountain or
    /// snow surface tile is passable. Kept as-is pending clarification; see
    /// `mountain_and_snow_are_not_solid` below.
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            TileKind::Bedrock | TileKind::Stone | TileKind::Dirt | TileKind::Grass
        )
    }

    /// Whether this kind is a mineable ore.
    pub fn is_ore(self) -> bool {
        matches!(self, TileKind::Diamond | TileKind::Iron | TileKind::Coal)
    }

    /// Human-readable name for logging.
    pub fn name(self) -> &'static str {
        match self {
            TileKind::Bedrock => "bedrock",
            TileKind::Stone => "stone",
            TileKind::Diamond => "diamond",
            TileKind::Iron => "iron",
            TileKind::Coal => "coal",
            TileKind::Dirt => "dirt",
            TileKind::Grass => "grass",
            TileKind::Sky => "sky",
            TileKind::Cave => "cave",
            TileKind::Mountain => "mountain",
            TileKind::Snow => "snow",
            TileKind::DaylitCave => "daylit cave",
            TileKind::DarkCave => "dark cave",
        }
    }

    /// Base display color for this kind.
    pub fn color(self) -> Rgb {
        match self {
            TileKind::Bedrock => Rgb(0, 0, 0),
            TileKind::Stone => Rgb(190, 190, 190),
            TileKind::Diamond => Rgb(0, 255, 255),
            TileKind::Iron => Rgb(255, 255, 255),
            TileKind::Coal => Rgb(0, 0, 0),
            TileKind::Dirt => Rgb(165, 42, 42),
            TileKind::Grass => Rgb(0, 255, 0),
            TileKind::Sky => Rgb(135, 206, 235),
            TileKind::Cave => Rgb(64, 64, 64),
            TileKind::Mountain => Rgb(169, 169, 169),
            TileKind::Snow => Rgb(255, 255, 255),
            TileKind::DaylitCave => Rgb(99, 135, 149),
            TileKind::DarkCave => Rgb(32, 32, 32),
        }
    }

    /// Darkened variant used for ores that sit inside the cave layer.
    fn cave_color(self) -> Rgb {
        match self {
            TileKind::Diamond => Rgb(0, 139, 139),
            TileKind::Iron => Rgb(169, 169, 169),
            TileKind::Coal => Rgb(47, 79, 79),
            other => other.color(),
        }
    }

    /// Display color for a cell at `row`, darkening ore kinds at or below
    /// the cave-start row.
    pub fn color_at(self, row: usize, cave_start_row: usize) -> Rgb {
        if self.is_ore() && row >= cave_start_row {
            self.cave_color()
        } else {
            self.color()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_set_is_exactly_bedrock_stone_dirt_grass() {
        let solid = [
            TileKind::Bedrock,
            TileKind::Stone,
            TileKind::Dirt,
            TileKind::Grass,
        ];
        for kind in solid {
            assert!(kind.is_solid(), "{} must be solid", kind.name());
        }
        let passable = [
            TileKind::Diamond,
            TileKind::Iron,
            TileKind::Coal,
            TileKind::Sky,
            TileKind::Cave,
            TileKind::DaylitCave,
            TileKind::DarkCave,
        ];
        for kind in passable {
            assert!(!kind.is_solid(), "{} must not be solid", kind.name());
        }
    }

    #[test]
    fn mountain_and_snow_are_not_solid() {
        // Intentional: surface mountain and snow tiles do not block the
        // player.
        assert!(!TileKind::Mountain.is_solid());
        assert!(!TileKind::Snow.is_solid());
    }

    #[test]
    fn ore_set_is_exactly_diamond_iron_coal() {
        for kind in [TileKind::Diamond, TileKind::Iron, TileKind::Coal] {
            assert!(kind.is_ore(), "{} must be an ore", kind.name());
        }
        for kind in [TileKind::Stone, TileKind::Cave, TileKind::Grass] {
            assert!(!kind.is_ore(), "{} must not be an ore", kind.name());
        }
    }

    #[test]
    fn ore_colors_darken_only_at_or_below_cave_start() {
        let cave_start = 90;
        for ore in [TileKind::Diamond, TileKind::Iron, TileKind::Coal] {
            assert_eq!(
                ore.color_at(50, cave_start),
                ore.color(),
                "{} above the cave layer keeps its surface color",
                ore.name()
            );
            assert_ne!(
                ore.color_at(90, cave_start),
                ore.color(),
                "{} at the cave-start row must darken",
                ore.name()
            );
        }
        // Non-ore kinds never darken.
        assert_eq!(
            TileKind::Stone.color_at(120, cave_start),
            TileKind::Stone.color()
        );
    }
}
