/// Render handoff: one ordered draw list per tick.
///
/// Items are listed back-to-front. The renderer must draw them in order.

use crate::entities::{GameState, GameStatus, Rect, Rgb, SpriteKey};

/// What to draw, independent of how a renderer turns it into pixels/cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Background,
    Effect { frame: usize },
    Hazard { radius: i32, color: Rgb },
    Actor(SpriteKey),
    Projectile { angle: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub paint: Paint,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub items: Vec<DrawItem>,
    pub status: GameStatus,
    pub tick: u64,
    pub hazards_left: usize,
    pub width: i32,
    pub height: i32,
}

/// Background, effects, hazards, actor, projectiles.
pub fn compose(state: &GameState) -> Frame {
    let mut items = Vec::with_capacity(
        2 + state.effects.len() + state.hazards.len() + state.projectiles.len(),
    );

    items.push(DrawItem {
        paint: Paint::Background,
        rect: Rect { x: 0, y: 0, w: state.width, h: state.height },
    });
    items.extend(state.effects.iter().map(|e| DrawItem {
        paint: Paint::Effect { frame: e.frame },
        rect: e.rect,
    }));
    items.extend(state.hazards.iter().map(|h| DrawItem {
        paint: Paint::Hazard { radius: h.radius, color: h.color },
        rect: h.rect,
    }));
    items.push(DrawItem {
        paint: Paint::Actor(state.actor.displayed_sprite()),
        rect: state.actor.rect,
    });
    items.extend(state.projectiles.iter().map(|p| DrawItem {
        paint: Paint::Projectile { angle: p.angle },
        rect: p.rect,
    }));

    Frame {
        items,
        status: state.status,
        tick: state.frame,
        hazards_left: state.hazards.len(),
        width: state.width,
        height: state.height,
    }
}
