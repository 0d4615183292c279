//! Animated full-screen backdrop

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;

use crate::action::Action;
use crate::dispatch::Component;
use crate::scene::{gradient_color, Scene, SceneKind};

const CLOUD_ART: &str = " .--~~--. ";
const SUN_ART: [&str; 3] = ["  \\ | /  ", "--( ☀ )--", "  / | \\  "];
const SNOW_GLYPHS: [char; 3] = ['·', '•', '❅'];

/// Paints the gradient and the particle layer behind the UI panels.
/// Render-only; it never consumes input.
#[derive(Default)]
pub struct Backdrop;

impl Backdrop {
    pub fn new() -> Self {
        Self
    }

    fn set_glyph(frame: &mut Frame, area: Rect, x: u16, y: u16, glyph: &str, fg: Color) {
        let (x, y) = (area.x + x, area.y + y);
        if x < area.x + area.width && y < area.y + area.height {
            let cell = &mut frame.buffer_mut()[(x, y)];
            cell.set_symbol(glyph);
            cell.set_fg(fg);
        }
    }

    fn paint_text(frame: &mut Frame, area: Rect, x: u16, y: u16, text: &str, fg: Color) {
        for (i, c) in text.chars().enumerate() {
            let col = x + i as u16;
            if col >= area.width || y >= area.height {
                break;
            }
            Self::set_glyph(frame, area, col, y, &c.to_string(), fg);
        }
    }
}

impl Component<Action> for Backdrop {
    type Props<'a> = &'a Scene;

    fn render(&mut self, frame: &mut Frame, area: Rect, scene: Self::Props<'_>) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        for row in 0..area.height {
            let bg = gradient_color(scene.kind, row, area.height);
            for col in 0..area.width {
                let cell = &mut frame.buffer_mut()[(area.x + col, area.y + row)];
                cell.set_symbol(" ");
                cell.set_style(Style::default().bg(bg));
            }
        }

        match scene.kind {
            SceneKind::Rain => {
                for p in &scene.particles {
                    Self::set_glyph(
                        frame,
                        area,
                        p.x as u16 % area.width,
                        p.y as u16 % area.height,
                        "│",
                        Color::Rgb(174, 194, 224),
                    );
                }
            }
            SceneKind::Snow => {
                for p in &scene.particles {
                    let glyph = SNOW_GLYPHS[p.tier as usize % SNOW_GLYPHS.len()];
                    Self::set_glyph(
                        frame,
                        area,
                        p.x as u16 % area.width,
                        p.y as u16 % area.height,
                        &glyph.to_string(),
                        Color::White,
                    );
                }
            }
            SceneKind::Clouds => {
                for p in &scene.particles {
                    Self::paint_text(
                        frame,
                        area,
                        p.x as u16 % area.width,
                        p.y as u16 % area.height,
                        CLOUD_ART,
                        Color::Rgb(230, 230, 230),
                    );
                }
            }
            SceneKind::ClearNight => {
                for p in &scene.particles {
                    // Bright for the first half of the twinkle period
                    let bright = p.phase < p.period / 2;
                    let (glyph, fg) = if bright {
                        (if p.tier == 0 { "✦" } else { "·" }, Color::White)
                    } else {
                        ("·", Color::Rgb(150, 160, 180))
                    };
                    Self::set_glyph(
                        frame,
                        area,
                        p.x as u16 % area.width,
                        p.y as u16 % area.height,
                        glyph,
                        fg,
                    );
                }
            }
            SceneKind::ClearDay => {
                let x = area.width.saturating_sub(14);
                for (i, line) in SUN_ART.iter().enumerate() {
                    Self::paint_text(frame, area, x, 1 + i as u16, line, Color::Yellow);
                }
            }
            SceneKind::Idle => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::testing::RenderHarness;

    #[test]
    fn test_rain_paints_drops() {
        let mut render = RenderHarness::new(40, 12);
        let mut backdrop = Backdrop::new();
        let mut scene = Scene::new();
        scene.regenerate(SceneKind::Rain, (40, 12));

        let output = render.render_to_string_plain(|frame| {
            backdrop.render(frame, frame.area(), &scene);
        });

        assert!(output.contains('│'));
    }

    #[test]
    fn test_clear_day_paints_sun() {
        let mut render = RenderHarness::new(40, 12);
        let mut backdrop = Backdrop::new();
        let mut scene = Scene::new();
        scene.regenerate(SceneKind::ClearDay, (40, 12));

        let output = render.render_to_string_plain(|frame| {
            backdrop.render(frame, frame.area(), &scene);
        });

        assert!(output.contains('☀'));
    }

    #[test]
    fn test_idle_is_blank() {
        let mut render = RenderHarness::new(20, 6);
        let mut backdrop = Backdrop::new();
        let scene = Scene::new();

        let output = render.render_to_string_plain(|frame| {
            backdrop.render(frame, frame.area(), &scene);
        });

        assert_eq!(output.trim(), "");
    }
}
