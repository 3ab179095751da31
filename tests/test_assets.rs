use bounce_shooter::assets::*;
use bounce_shooter::entities::{Direction, Reaction, SpriteKey};
use bounce_shooter::AssetError;

/// Built-in catalogue minus one name.
struct Without(&'static str);

impl AssetProvider for Without {
    fn resolve(&self, name: &str) -> Result<Glyph, AssetError> {
        if name == self.0 {
            return Err(AssetError::MissingSprite { name: name.to_string() });
        }
        BuiltinGlyphs::default().resolve(name)
    }
}

#[test]
fn builtin_sheet_loads_for_every_variant() {
    for variant in 0..=MAX_PLAYER_VARIANT {
        assert!(SpriteSheet::load(&BuiltinGlyphs::default(), variant).is_ok());
    }
}

#[test]
fn unknown_variant_is_rejected() {
    let err = SpriteSheet::load(&BuiltinGlyphs::default(), 10).unwrap_err();
    assert_eq!(err, AssetError::UnknownVariant { variant: 10, max: 9 });
}

#[test]
fn missing_sprite_fails_the_load() {
    let err = SpriteSheet::load(&Without("explosion/1"), 3).unwrap_err();
    assert_eq!(err, AssetError::MissingSprite { name: "explosion/1".to_string() });
    assert_eq!(err.to_string(), "missing sprite `explosion/1`");
}

#[test]
fn builtin_unknown_name_is_missing() {
    let err = BuiltinGlyphs::default().resolve("player/42").unwrap_err();
    assert_eq!(err, AssetError::MissingSprite { name: "player/42".to_string() });
}

#[test]
fn facing_glyphs_take_the_player_colour() {
    let provider = BuiltinGlyphs::default();
    let body = provider.resolve("player/3").unwrap();
    let sheet = SpriteSheet::load(&provider, 3).unwrap();
    for d in Direction::ALL {
        let glyph = sheet.actor(SpriteKey::Facing(d)).unwrap();
        assert_eq!(glyph.color, body.color);
        assert_eq!(glyph.text, provider.resolve(facing_name(d)).unwrap().text);
    }
}

#[test]
fn reactions_use_their_own_families() {
    let provider = BuiltinGlyphs::default();
    let sheet = SpriteSheet::load(&provider, 0).unwrap();
    assert_eq!(
        sheet.actor(SpriteKey::Reaction(Reaction::Kill)),
        Some(&provider.resolve("player/6").unwrap())
    );
    assert_eq!(
        sheet.actor(SpriteKey::Reaction(Reaction::Defeat)),
        Some(&provider.resolve("player/8").unwrap())
    );
}

#[test]
fn beam_glyph_follows_the_line_of_fire() {
    let provider = BuiltinGlyphs::default();
    let sheet = SpriteSheet::load(&provider, 3).unwrap();
    let beam = |name: &str| provider.resolve(name).unwrap();
    assert_eq!(sheet.beam(0.0), &beam("beam/0"));
    assert_eq!(sheet.beam(180.0), &beam("beam/0"));
    assert_eq!(sheet.beam(45.0), &beam("beam/45"));
    assert_eq!(sheet.beam(-135.0), &beam("beam/45"));
    assert_eq!(sheet.beam(90.0), &beam("beam/90"));
    assert_eq!(sheet.beam(-90.0), &beam("beam/90"));
    assert_eq!(sheet.beam(-45.0), &beam("beam/135"));
}

#[test]
fn explosion_frames_wrap() {
    let provider = BuiltinGlyphs::default();
    let sheet = SpriteSheet::load(&provider, 3).unwrap();
    assert_eq!(sheet.explosion(0), &provider.resolve("explosion/0").unwrap());
    assert_eq!(sheet.explosion(1), &provider.resolve("explosion/1").unwrap());
    assert_eq!(sheet.explosion(2), sheet.explosion(0));
}
