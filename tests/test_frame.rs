use bounce_shooter::entities::*;
use bounce_shooter::frame::*;

fn populated_state() -> GameState {
    let mut s = GameState::new(1600, 900, (900, 400));
    s.hazards.push(Hazard {
        id: 0,
        rect: Rect::from_center((200, 200), 40, 40),
        radius: 20,
        color: Rgb(255, 0, 0),
        vx: 5,
        vy: 5,
    });
    s.projectiles.push(Projectile {
        id: 1,
        rect: Rect::from_center((1000, 400), 100, 100),
        vx: 5,
        vy: 0,
        angle: 0.0,
    });
    s.effects.push(EffectAnim::new((600, 600), 10));
    s.frame = 12;
    s
}

#[test]
fn compose_orders_back_to_front() {
    let f = compose(&populated_state());
    let kinds: Vec<&str> = f
        .items
        .iter()
        .map(|i| match i.paint {
            Paint::Background => "background",
            Paint::Effect { .. } => "effect",
            Paint::Hazard { .. } => "hazard",
            Paint::Actor(_) => "actor",
            Paint::Projectile { .. } => "projectile",
        })
        .collect();
    assert_eq!(kinds, vec!["background", "effect", "hazard", "actor", "projectile"]);
}

#[test]
fn compose_background_covers_playfield() {
    let f = compose(&populated_state());
    assert_eq!(f.items[0].rect, Rect { x: 0, y: 0, w: 1600, h: 900 });
    assert_eq!((f.width, f.height), (1600, 900));
}

#[test]
fn compose_carries_entity_state() {
    let s = populated_state();
    let f = compose(&s);
    assert_eq!(f.items[2].paint, Paint::Hazard { radius: 20, color: Rgb(255, 0, 0) });
    assert_eq!(f.items[2].rect, s.hazards[0].rect);
    assert_eq!(f.items[4].rect, s.projectiles[0].rect);
    assert_eq!(f.tick, 12);
    assert_eq!(f.hazards_left, 1);
    assert_eq!(f.status, GameStatus::Running);
}

#[test]
fn compose_shows_pending_reaction() {
    let mut s = populated_state();
    s.actor.pending_reaction = Some(Reaction::Kill);
    let f = compose(&s);
    assert_eq!(f.items[3].paint, Paint::Actor(SpriteKey::Reaction(Reaction::Kill)));
}

#[test]
fn compose_empty_state_has_background_and_actor() {
    let s = GameState::new(1600, 900, (900, 400));
    let f = compose(&s);
    assert_eq!(f.items.len(), 2);
    assert_eq!(f.items[1].paint, Paint::Actor(SpriteKey::Facing(Direction::Right)));
}
