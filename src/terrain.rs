//! Terrain symbols stored in each tile of the map.

/// Content of a single tile
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Terrain {
    /// Not yet written by any generation phase
    #[default]
    Unset,
    /// Impassable boulders along the map edge
    Wall,
    /// Carved road, also used for the four exits
    Road,
    /// Open walkable ground (base terrain)
    Clearing,
    /// Tall grass patch
    TallGrass,
    /// Shallow water patch
    Water,
    /// One 2x2 building footprint cell, tagged with the building's symbol
    Building(char),
}

impl Terrain {
    /// Glyphs reserved by the terrain alphabet; buildings must pick something else.
    pub const RESERVED_GLYPHS: [char; 6] = [' ', '%', '#', '.', ':', '~'];

    pub fn is_wall(&self) -> bool {
        matches!(self, Terrain::Wall)
    }

    pub fn is_road(&self) -> bool {
        matches!(self, Terrain::Road)
    }

    pub fn is_building(&self) -> bool {
        matches!(self, Terrain::Building(_))
    }

    /// Blob painting and ring clearing leave these tiles alone.
    pub fn is_protected(&self) -> bool {
        self.is_road() || self.is_building()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Terrain::Unset => "Unset",
            Terrain::Wall => "Wall",
            Terrain::Road => "Road",
            Terrain::Clearing => "Clearing",
            Terrain::TallGrass => "Tall grass",
            Terrain::Water => "Water",
            Terrain::Building(_) => "Building",
        }
    }
}
