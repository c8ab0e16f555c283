use glam::IVec2;

/// Axis-aligned bounding box in canvas pixels, `max` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aabb {
    pub min: IVec2,
    pub max: IVec2,
}

impl Aabb {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn size(&self) -> IVec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The drawable game area, origin top-left, y growing downward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(IVec2::ZERO, IVec2::new(self.width, self.height))
    }

    /// Clamp the top edge of something `extent` tall so it stays on the field
    pub fn clamp_y(&self, y: i32, extent: i32) -> i32 {
        y.clamp(0, (self.height - extent).max(0))
    }

    pub fn mid_x(&self) -> i32 {
        self.width / 2
    }

    pub fn mid_y(&self) -> i32 {
        self.height / 2
    }
}
