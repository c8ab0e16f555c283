use glam::IVec2;

use crate::Aabb;

/// Vertical direction a paddle can be asked to move in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Movement intent for paddle, one flag per held key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// -1 = up, 0 = stop (or both held), 1 = down
    pub fn dir(&self) -> i32 {
        self.down as i32 - self.up as i32
    }
}

/// Paddle component - a vertical bar, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub pos: IVec2,
    pub size: IVec2,
    pub speed: i32,
    pub intent: PaddleIntent,
}

impl Paddle {
    pub fn new(pos: IVec2, size: IVec2, speed: i32) -> Self {
        Self {
            pos,
            size,
            speed,
            intent: PaddleIntent::new(),
        }
    }

    pub fn press(&mut self, dir: Direction) {
        self.intent.set(dir, true);
    }

    pub fn release(&mut self, dir: Direction) {
        self.intent.set(dir, false);
    }

    /// Vertical velocity implied by the held keys, in pixels per tick
    pub fn velocity(&self) -> i32 {
        self.intent.dir() * self.speed
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }
}

/// Ball component - the pong ball, a square of side `diameter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    pub diameter: i32,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2, diameter: i32) -> Self {
        Self { pos, vel, diameter }
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.diameter / 2
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, IVec2::splat(self.diameter))
    }

    /// Put the ball back on the serve point; velocity is left alone
    pub fn reset(&mut self, serve: IVec2) {
        self.pos = serve;
    }

    /// Re-roll the sign of each velocity component, keeping its magnitude
    pub fn randomize_direction(&mut self, rng: &mut crate::GameRng) {
        use rand::Rng;
        let vx = self.vel.x.abs();
        let vy = self.vel.y.abs();
        self.vel.x = if rng.0.gen_bool(0.5) { vx } else { -vx };
        self.vel.y = if rng.0.gen_bool(0.5) { vy } else { -vy };
    }
}
