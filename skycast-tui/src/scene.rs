//! Decorative backdrop scene
//!
//! Five mutually exclusive décor variants plus a neutral idle one. A
//! scene holds the particle field in terminal-cell space; the backdrop
//! component paints it over a per-row gradient. Regeneration fully
//! clears the previous particles, so variants never accumulate.

use rand::Rng;
use ratatui::style::Color;
use skycast_core::Condition;

pub const RAIN_DROPS: usize = 80;
pub const SNOW_FLAKES: usize = 50;
pub const CLOUD_COUNT: usize = 3;
pub const STAR_COUNT: usize = 50;

/// The selected décor variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneKind {
    /// Neutral backdrop before the first lookup and after a reset.
    #[default]
    Idle,
    Rain,
    Snow,
    Clouds,
    ClearDay,
    ClearNight,
}

impl SceneKind {
    /// Selection policy: condition first, then time of day for clear.
    pub fn for_weather(condition: Condition, is_daytime: bool) -> Self {
        match condition {
            Condition::Rain => SceneKind::Rain,
            Condition::Snow => SceneKind::Snow,
            Condition::Cloud => SceneKind::Clouds,
            Condition::Clear => {
                if is_daytime {
                    SceneKind::ClearDay
                } else {
                    SceneKind::ClearNight
                }
            }
        }
    }

    /// Gradient stops, top to bottom.
    pub fn gradient(&self) -> &'static [(u8, u8, u8)] {
        match self {
            SceneKind::Idle => &[(30, 60, 114), (42, 82, 152)],
            SceneKind::Rain => &[(75, 108, 183), (24, 40, 72)],
            SceneKind::Snow => &[(131, 164, 212), (182, 251, 255)],
            SceneKind::Clouds => &[(189, 195, 199), (44, 62, 80)],
            SceneKind::ClearDay => &[(246, 211, 101), (253, 160, 133)],
            SceneKind::ClearNight => &[(15, 32, 39), (32, 58, 67), (44, 83, 100)],
        }
    }
}

/// Background color for one row of the backdrop.
pub fn gradient_color(kind: SceneKind, row: u16, height: u16) -> Color {
    let stops = kind.gradient();
    debug_assert!(stops.len() >= 2);

    if height <= 1 {
        let (r, g, b) = stops[0];
        return Color::Rgb(r, g, b);
    }

    let t = row as f32 / (height - 1) as f32;
    let segments = (stops.len() - 1) as f32;
    // Keep pos strictly below the last stop so idx + 1 stays in bounds
    let pos = (t * segments).min(segments - 1e-4);
    let idx = pos as usize;
    let local = pos - idx as f32;

    let (r0, g0, b0) = stops[idx];
    let (r1, g1, b1) = stops[idx + 1];
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * local).round() as u8;
    Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

/// One particle in scene-space cells.
///
/// Interpretation depends on the scene kind: drops and flakes fall by
/// `speed` rows per tick, clouds drift by `speed` columns, stars stay
/// put and twinkle through `phase`/`period`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Size tier for flakes and stars.
    pub tier: u8,
    pub phase: u16,
    pub period: u16,
}

/// The particle field for the current décor variant.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub kind: SceneKind,
    pub particles: Vec<Particle>,
    width: u16,
    height: u16,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    pub fn new() -> Self {
        Self {
            kind: SceneKind::Idle,
            particles: Vec::new(),
            width: 80,
            height: 24,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Whether ticks change the visible backdrop.
    pub fn is_animated(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Rebuild the particle layer for a variant at the given size.
    ///
    /// Exactly one variant populates per call; the previous particles
    /// are always discarded first. Randomized parameters only need to
    /// land in the documented ranges.
    pub fn regenerate(&mut self, kind: SceneKind, size: (u16, u16)) {
        let (width, height) = (size.0.max(1), size.1.max(1));
        self.kind = kind;
        self.width = width;
        self.height = height;
        self.particles.clear();

        let w = width as f32;
        let h = height as f32;
        let mut rng = rand::rng();

        match kind {
            SceneKind::Rain => {
                // Fall speed within [1.0, 2.0) rows per tick
                for _ in 0..RAIN_DROPS {
                    self.particles.push(Particle {
                        x: rng.random_range(0.0..w),
                        y: rng.random_range(0.0..h),
                        speed: rng.random_range(1.0..2.0),
                        tier: 0,
                        phase: 0,
                        period: 0,
                    });
                }
            }
            SceneKind::Snow => {
                // Three glyph tiers, fall speed within [0.2, 0.6)
                for _ in 0..SNOW_FLAKES {
                    self.particles.push(Particle {
                        x: rng.random_range(0.0..w),
                        y: rng.random_range(0.0..h),
                        speed: rng.random_range(0.2..0.6),
                        tier: rng.random_range(0..3),
                        phase: 0,
                        period: 0,
                    });
                }
            }
            SceneKind::Clouds => {
                // Drift within [0.1, 0.4) columns per tick, upper half
                for _ in 0..CLOUD_COUNT {
                    self.particles.push(Particle {
                        x: rng.random_range(0.0..w),
                        y: rng.random_range(0.0..(h / 2.0).max(1.0)),
                        speed: rng.random_range(0.1..0.4),
                        tier: 0,
                        phase: 0,
                        period: 0,
                    });
                }
            }
            SceneKind::ClearNight => {
                // Twinkle period within [30, 80) ticks
                for _ in 0..STAR_COUNT {
                    let period = rng.random_range(30..80);
                    self.particles.push(Particle {
                        x: rng.random_range(0.0..w),
                        y: rng.random_range(0.0..h),
                        speed: 0.0,
                        tier: rng.random_range(0..2),
                        phase: rng.random_range(0..period),
                        period,
                    });
                }
            }
            SceneKind::ClearDay | SceneKind::Idle => {}
        }
    }

    /// Advance the animation by one tick.
    pub fn advance(&mut self) {
        let w = self.width as f32;
        let h = self.height as f32;

        match self.kind {
            SceneKind::Rain | SceneKind::Snow => {
                for p in &mut self.particles {
                    p.y += p.speed;
                    if p.y >= h {
                        p.y -= h;
                    }
                }
            }
            SceneKind::Clouds => {
                for p in &mut self.particles {
                    p.x += p.speed;
                    if p.x >= w {
                        p.x -= w;
                    }
                }
            }
            SceneKind::ClearNight => {
                for p in &mut self.particles {
                    p.phase = (p.phase + 1) % p.period.max(1);
                }
            }
            SceneKind::ClearDay | SceneKind::Idle => {}
        }
    }
}
