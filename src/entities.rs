/// All game entity types — pure data, no game logic.
///
/// Coordinates are playfield units with the origin at the top-left corner;
/// `y` grows downward.

use std::collections::HashMap;

/// Magnitude of one movement step on either axis.
pub const STEP: i32 = 5;

/// Number of images the explosion cycles through.
pub const EFFECT_FRAMES: usize = 2;

/// Size of the actor's bounding rectangle (projectiles copy it).
pub const ACTOR_SIZE: (i32, i32) = (100, 100);

/// Size of an explosion's bounding rectangle.
pub const EFFECT_SIZE: (i32, i32) = (80, 80);

/// Hazard colours, as RGB triples.
pub const HAZARD_PALETTE: [Rgb; 6] = [
    Rgb(255, 0, 0),
    Rgb(0, 255, 0),
    Rgb(0, 0, 255),
    Rgb(255, 255, 0),
    Rgb(255, 0, 255),
    Rgb(0, 255, 255),
];

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Axis-aligned rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn from_center((cx, cy): (i32, i32), w: i32, h: i32) -> Self {
        Rect { x: cx - w / 2, y: cy - h / 2, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn collides(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the eight canonical movement/facing directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    /// Counter-clockwise from "right".
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Right => (STEP, 0),
            Direction::UpRight => (STEP, -STEP),
            Direction::Up => (0, -STEP),
            Direction::UpLeft => (-STEP, -STEP),
            Direction::Left => (-STEP, 0),
            Direction::DownLeft => (-STEP, STEP),
            Direction::Down => (0, STEP),
            Direction::DownRight => (STEP, STEP),
        }
    }

    /// Normalise an arbitrary vector to a canonical direction by the sign of
    /// each axis. The zero vector has no direction.
    pub fn from_vector(dx: i32, dy: i32) -> Option<Direction> {
        match (dx.signum(), dy.signum()) {
            (1, 0) => Some(Direction::Right),
            (1, -1) => Some(Direction::UpRight),
            (0, -1) => Some(Direction::Up),
            (-1, -1) => Some(Direction::UpLeft),
            (-1, 0) => Some(Direction::Left),
            (-1, 1) => Some(Direction::DownLeft),
            (0, 1) => Some(Direction::Down),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// Screen azimuth in degrees, counter-clockwise from "right".
    pub fn azimuth(self) -> f32 {
        let (dx, dy) = self.step();
        (-(dy as f32)).atan2(dx as f32).to_degrees()
    }
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Special actor poses shown outside the direction table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Reaction {
    /// A hazard was shot down.
    Kill,
    /// The actor touched a hazard.
    Defeat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Facing(Direction),
    Reaction(Reaction),
}

// ── Entities ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Actor {
    pub rect: Rect,
    pub direction: Direction,
    /// Direction-indexed sprite table.
    pub sprites: HashMap<Direction, SpriteKey>,
    /// Sprite chosen by the last movement update.
    pub sprite: SpriteKey,
    /// Reaction to show on the next render instead of `sprite`.
    pub pending_reaction: Option<Reaction>,
}

impl Actor {
    /// A fresh actor facing right, centred on `center`.
    pub fn new(center: (i32, i32)) -> Self {
        let sprites = Direction::ALL
            .iter()
            .map(|&d| (d, SpriteKey::Facing(d)))
            .collect();
        Actor {
            rect: Rect::from_center(center, ACTOR_SIZE.0, ACTOR_SIZE.1),
            direction: Direction::Right,
            sprites,
            sprite: SpriteKey::Facing(Direction::Right),
            pending_reaction: None,
        }
    }

    /// The sprite the renderer should show this tick.
    pub fn displayed_sprite(&self) -> SpriteKey {
        match self.pending_reaction {
            Some(reaction) => SpriteKey::Reaction(reaction),
            None => self.sprite,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hazard {
    pub id: u32,
    pub rect: Rect,
    pub radius: i32,
    pub color: Rgb,
    pub vx: i32,
    pub vy: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub id: u32,
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
    /// Visual rotation in degrees; collision uses `rect` only.
    pub angle: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectAnim {
    pub rect: Rect,
    /// Index into the explosion image set.
    pub frame: usize,
    /// Remaining ticks.
    pub life: i32,
}

impl EffectAnim {
    pub fn new(center: (i32, i32), life: i32) -> Self {
        EffectAnim {
            rect: Rect::from_center(center, EFFECT_SIZE.0, EFFECT_SIZE.1),
            frame: 0,
            life,
        }
    }
}

// ── Input snapshot ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Fire,
    Quit,
}

/// Everything the simulation reads from the player for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    /// Directional keys held at frame start.
    pub held: Vec<Direction>,
    /// Discrete events since the previous poll, in arrival order.
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::Quit)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Ended,
}

/// How many Projectile–Hazard hits a single tick may resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// At most one hit per tick; later overlaps wait for the next tick.
    #[default]
    SinglePerTick,
    /// Every hazard may be hit, each projectile consumed at most once.
    AllPairs,
}

/// The entire game state. Cloneable so `tick` can return a new copy
/// without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub actor: Actor,
    pub hazards: Vec<Hazard>,
    pub projectiles: Vec<Projectile>,
    pub effects: Vec<EffectAnim>,
    pub status: GameStatus,
    pub frame: u64,
    pub width: i32,
    pub height: i32,
    pub effect_life: i32,
    pub policy: CollisionPolicy,
    /// Next identifier handed to a hazard or projectile.
    pub next_id: u32,
}

impl GameState {
    /// Empty playfield with the actor at `start`.
    pub fn new(width: i32, height: i32, start: (i32, i32)) -> Self {
        GameState {
            actor: Actor::new(start),
            hazards: Vec::new(),
            projectiles: Vec::new(),
            effects: Vec::new(),
            status: GameStatus::Running,
            frame: 0,
            width,
            height,
            effect_life: 10,
            policy: CollisionPolicy::default(),
            next_id: 0,
        }
    }

    pub fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
