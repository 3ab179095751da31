/// Game-logic functions.
///
/// Entity updates mutate the entity they are given. The per-frame `tick`
/// takes an immutable reference to the current `GameState` and returns a
/// brand-new one. Randomness only enters through `init_state` and
/// `spawn_hazard`, via an injected RNG.

use log::{debug, info, trace};
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Actor, CollisionPolicy, Direction, EffectAnim, GameState, GameStatus, Hazard, InputEvent,
    Projectile, Reaction, Rect, TickInput, EFFECT_FRAMES, HAZARD_PALETTE, STEP,
};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Whether `rect` lies inside the playfield, per axis: `(horizontal, vertical)`.
pub fn check_bound(rect: &Rect, width: i32, height: i32) -> (bool, bool) {
    let horizontal = rect.left() >= 0 && rect.right() <= width;
    let vertical = rect.top() >= 0 && rect.bottom() <= height;
    (horizontal, vertical)
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// Move the actor by the sum of the held directions and pick its facing
/// sprite. Held keys form a set: a direction listed twice counts once.
/// A move that would leave the playfield on either axis is dropped
/// entirely.
pub fn apply_input(actor: &mut Actor, held: &[Direction], width: i32, height: i32) {
    let mut distinct: Vec<Direction> = Vec::with_capacity(held.len());
    for d in held {
        if !distinct.contains(d) {
            distinct.push(*d);
        }
    }
    let (dx, dy) = distinct.iter().fold((0, 0), |(x, y), d| {
        let (sx, sy) = d.step();
        (x + sx, y + sy)
    });

    if let Some(direction) = Direction::from_vector(dx, dy) {
        actor.direction = direction;
    }

    let moved = actor.rect.moved(dx, dy);
    if check_bound(&moved, width, height) == (true, true) {
        actor.rect = moved;
    }

    if let Some(&sprite) = actor.sprites.get(&actor.direction) {
        actor.sprite = sprite;
    }
}

/// Queue a reaction pose for the next render. Direction and position are
/// left untouched.
pub fn force_sprite(actor: &mut Actor, reaction: Reaction) {
    actor.pending_reaction = Some(reaction);
}

// ── Hazards ───────────────────────────────────────────────────────────────────

pub fn spawn_hazard(id: u32, width: i32, height: i32, rng: &mut impl Rng) -> Hazard {
    let radius = rng.gen_range(10..=50);
    let color = HAZARD_PALETTE[rng.gen_range(0..HAZARD_PALETTE.len())];
    let center = (rng.gen_range(0..=width), rng.gen_range(0..=height));
    let vx = if rng.gen_bool(0.5) { STEP } else { -STEP };
    let vy = if rng.gen_bool(0.5) { STEP } else { -STEP };
    Hazard {
        id,
        rect: Rect::from_center(center, 2 * radius, 2 * radius),
        radius,
        color,
        vx,
        vy,
    }
}

/// Reflect on any axis already outside the playfield, then move. The
/// reflection lags the crossing by one frame.
pub fn update_hazard(hazard: &mut Hazard, width: i32, height: i32) {
    let (horizontal, vertical) = check_bound(&hazard.rect, width, height);
    if !horizontal {
        hazard.vx = -hazard.vx;
    }
    if !vertical {
        hazard.vy = -hazard.vy;
    }
    hazard.rect = hazard.rect.moved(hazard.vx, hazard.vy);
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A projectile one rectangle-length ahead of `center` in `direction`,
/// travelling with the direction's step vector.
pub fn spawn_projectile(
    id: u32,
    center: (i32, i32),
    direction: Direction,
    (w, h): (i32, i32),
) -> Projectile {
    let (dx, dy) = direction.step();
    let start = (center.0 + w * dx / STEP, center.1 + h * dy / STEP);
    Projectile {
        id,
        rect: Rect::from_center(start, w, h),
        vx: dx,
        vy: dy,
        angle: direction.azimuth(),
    }
}

pub fn update_projectile(projectile: &mut Projectile) {
    projectile.rect = projectile.rect.moved(projectile.vx, projectile.vy);
}

// ── Effects ───────────────────────────────────────────────────────────────────

/// Count down one tick. Returns `false` once the effect has expired;
/// otherwise advances to the next explosion image.
pub fn tick_effect(effect: &mut EffectAnim) -> bool {
    effect.life -= 1;
    if effect.life <= 0 {
        return false;
    }
    effect.frame = (effect.frame + 1) % EFFECT_FRAMES;
    true
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the opening state: actor at its start position, `hazard_count`
/// randomly placed hazards.
pub fn init_state(config: &GameConfig, rng: &mut impl Rng) -> GameState {
    let mut state = GameState::new(config.width, config.height, config.actor_start);
    state.effect_life = config.effect_life;
    state.policy = config.collision_policy;
    for _ in 0..config.hazard_count {
        let id = state.alloc_id();
        let hazard = spawn_hazard(id, config.width, config.height, rng);
        state.hazards.push(hazard);
    }
    info!(
        "session start: {}x{} playfield, {} hazards, {:?}",
        config.width, config.height, config.hazard_count, config.collision_policy
    );
    state
}

// ── Collision resolution ──────────────────────────────────────────────────────

/// Pair hazards with the projectiles that hit them, in hazard list order.
/// Returns `(destroyed hazard ids, consumed projectile ids)`.
fn resolve_hits(
    hazards: &[Hazard],
    projectiles: &[Projectile],
    policy: CollisionPolicy,
) -> (Vec<u32>, Vec<u32>) {
    let mut destroyed: Vec<u32> = Vec::new();
    let mut consumed: Vec<u32> = Vec::new();

    for hazard in hazards {
        let hit = projectiles
            .iter()
            .find(|p| !consumed.contains(&p.id) && p.rect.collides(&hazard.rect));
        if let Some(projectile) = hit {
            destroyed.push(hazard.id);
            consumed.push(projectile.id);
            if policy == CollisionPolicy::SinglePerTick {
                break;
            }
        }
    }

    (destroyed, consumed)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame. An ended session is returned
/// unchanged.
pub fn tick(state: &GameState, input: &TickInput) -> GameState {
    let mut next = state.clone();
    if next.status == GameStatus::Ended {
        return next;
    }
    next.frame += 1;
    // Reactions live for exactly one render.
    next.actor.pending_reaction = None;

    // ── 1. Fire events ───────────────────────────────────────────────────────
    for event in &input.events {
        if *event == InputEvent::Fire {
            let id = next.alloc_id();
            let projectile = spawn_projectile(
                id,
                next.actor.rect.center(),
                next.actor.direction,
                (next.actor.rect.w, next.actor.rect.h),
            );
            debug!("projectile {} fired {:?}", id, next.actor.direction);
            next.projectiles.push(projectile);
        }
    }

    // ── 2. Actor ↔ hazards ───────────────────────────────────────────────────
    if let Some(hazard) = next
        .hazards
        .iter()
        .find(|h| next.actor.rect.collides(&h.rect))
    {
        info!("actor hit by hazard {} on frame {}", hazard.id, next.frame);
        force_sprite(&mut next.actor, Reaction::Defeat);
        next.status = GameStatus::Ended;
        return next;
    }

    // ── 3. Effects ───────────────────────────────────────────────────────────
    next.effects.retain_mut(tick_effect);

    // ── 4. Projectiles ↔ hazards ─────────────────────────────────────────────
    let (destroyed, consumed) = resolve_hits(&next.hazards, &next.projectiles, next.policy);
    for hazard in next.hazards.iter().filter(|h| destroyed.contains(&h.id)) {
        debug!("hazard {} destroyed at {:?}", hazard.id, hazard.rect.center());
        next.effects
            .push(EffectAnim::new(hazard.rect.center(), next.effect_life));
    }
    if !destroyed.is_empty() {
        force_sprite(&mut next.actor, Reaction::Kill);
    }

    // ── 5. Compaction ────────────────────────────────────────────────────────
    let (width, height) = (next.width, next.height);
    next.hazards.retain(|h| !destroyed.contains(&h.id));
    next.projectiles.retain(|p| {
        !consumed.contains(&p.id) && check_bound(&p.rect, width, height) == (true, true)
    });

    // ── 6. Movement ──────────────────────────────────────────────────────────
    apply_input(&mut next.actor, &input.held, width, height);
    for hazard in &mut next.hazards {
        update_hazard(hazard, width, height);
    }
    for projectile in &mut next.projectiles {
        update_projectile(projectile);
    }

    trace!(
        "frame {}: {} hazards, {} projectiles, {} effects",
        next.frame,
        next.hazards.len(),
        next.projectiles.len(),
        next.effects.len()
    );
    next
}
