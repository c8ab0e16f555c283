//! Drawing through a host-supplied surface
//!
//! The core decides what to draw and in which order; the host only has to
//! supply four primitives. Colours are the host's business: the background is
//! dark and everything else is drawn in one foreground colour.

use std::convert::Infallible;

use crate::{Aabb, Game, GameState, Params};

/// Minimal 2D drawing target
pub trait Surface {
    type Error;

    fn fill_background(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke_width: f64,
    ) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;

    /// `(x, y)` is the left end of the text baseline
    fn draw_text(&mut self, text: &str, x: f64, y: f64, font_size: u32)
        -> Result<(), Self::Error>;
}

/// Draw one frame: background, borders, divider, scores, then either the
/// title text or the paddles and ball
pub fn draw_frame<S: Surface>(game: &Game, surface: &mut S) -> Result<(), S::Error> {
    let config = game.config();
    let w = config.canvas_width as f64;
    let h = config.canvas_height as f64;
    let mid = w / 2.0;

    surface.fill_background(w, h)?;

    surface.draw_line((0.0, 0.0), (w, 0.0), Params::BORDER_STROKE)?;
    surface.draw_line((0.0, h - 1.0), (w, h - 1.0), Params::BORDER_STROKE)?;
    surface.draw_line((mid, 0.0), (mid, h), Params::DIVIDER_STROKE)?;

    // Each counter sits on its owner's half of the court
    let score = game.score();
    surface.draw_text(&score.left.to_string(), mid - 45.0, 45.0, Params::SCORE_FONT_SIZE)?;
    surface.draw_text(&score.right.to_string(), mid + 5.0, 45.0, Params::SCORE_FONT_SIZE)?;

    match game.state() {
        GameState::TitleScreen => draw_title(surface, mid),
        state => {
            if let Some(paddles) = state.paddles() {
                for paddle in paddles {
                    fill_box(surface, paddle.rect())?;
                }
            }
            match state.ball() {
                Some(ball) => fill_box(surface, ball.rect()),
                None => Ok(()),
            }
        }
    }
}

fn draw_title<S: Surface>(surface: &mut S, mid: f64) -> Result<(), S::Error> {
    surface.draw_text("Pong", mid - 60.0, 100.0, Params::TITLE_FONT_SIZE)?;
    surface.draw_text(
        "Press Spacebar for PvP",
        mid - 120.0,
        200.0,
        Params::INSTRUCTION_FONT_SIZE,
    )?;
    surface.draw_text(
        "Press Enter for PvC",
        mid - 110.0,
        250.0,
        Params::INSTRUCTION_FONT_SIZE,
    )
}

fn fill_box<S: Surface>(surface: &mut S, rect: Aabb) -> Result<(), S::Error> {
    let size = rect.size();
    surface.fill_rect(
        rect.min.x as f64,
        rect.min.y as f64,
        size.x as f64,
        size.y as f64,
    )
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Background {
        width: f64,
        height: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        stroke_width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font_size: u32,
    },
}

/// Headless surface that records every call in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandList {
    pub commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl Surface for CommandList {
    type Error = Infallible;

    fn fill_background(&mut self, width: f64, height: f64) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Background { width, height });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke_width: f64,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke_width,
        });
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font_size: u32,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            x,
            y,
            font_size,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Key};

    fn render(game: &Game) -> CommandList {
        let mut list = CommandList::new();
        draw_frame(game, &mut list).unwrap();
        list
    }

    #[test]
    fn test_title_frame_order() {
        let game = Game::new(Config::new());
        let list = render(&game);

        assert_eq!(
            list.commands[..4],
            [
                DrawCommand::Background {
                    width: 800.0,
                    height: 600.0
                },
                DrawCommand::Line {
                    from: (0.0, 0.0),
                    to: (800.0, 0.0),
                    stroke_width: 8.0
                },
                DrawCommand::Line {
                    from: (0.0, 599.0),
                    to: (800.0, 599.0),
                    stroke_width: 8.0
                },
                DrawCommand::Line {
                    from: (400.0, 0.0),
                    to: (400.0, 600.0),
                    stroke_width: 3.0
                },
            ]
        );
        assert_eq!(
            list.texts().collect::<Vec<_>>(),
            ["0", "0", "Pong", "Press Spacebar for PvP", "Press Enter for PvC"]
        );
        assert_eq!(list.rects().count(), 0, "No entities on the title screen");
    }

    #[test]
    fn test_title_text_positions() {
        let list = render(&Game::new(Config::new()));
        assert!(list.commands.contains(&DrawCommand::Text {
            text: "Pong".into(),
            x: 340.0,
            y: 100.0,
            font_size: 40
        }));
        assert!(list.commands.contains(&DrawCommand::Text {
            text: "Press Spacebar for PvP".into(),
            x: 280.0,
            y: 200.0,
            font_size: 20
        }));
        assert!(list.commands.contains(&DrawCommand::Text {
            text: "Press Enter for PvC".into(),
            x: 290.0,
            y: 250.0,
            font_size: 20
        }));
    }

    #[test]
    fn test_play_frame_draws_paddles_then_ball() {
        let mut game = Game::new(Config::new());
        game.key_down(Key::Space);
        let list = render(&game);

        let rects: Vec<_> = list.rects().cloned().collect();
        assert_eq!(
            rects,
            [
                DrawCommand::Rect {
                    x: 14.0,
                    y: 240.0,
                    width: 20.0,
                    height: 80.0
                },
                DrawCommand::Rect {
                    x: 760.0,
                    y: 240.0,
                    width: 20.0,
                    height: 80.0
                },
                DrawCommand::Rect {
                    x: 400.0,
                    y: 300.0,
                    width: 20.0,
                    height: 20.0
                },
            ]
        );
        assert_eq!(list.texts().collect::<Vec<_>>(), ["0", "0"]);
        assert!(
            matches!(list.commands.last(), Some(DrawCommand::Rect { .. })),
            "Entities are drawn last"
        );
    }

    #[test]
    fn test_scores_sit_on_owner_side() {
        let mut game = Game::new(Config::new());
        game.key_down(Key::Space);
        // Run until the ball leaves on the right and the left player scores
        while game.score().left == 0 {
            game.tick();
        }
        let list = render(&game);
        let scores: Vec<_> = list
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, .. } => Some((text.as_str(), *x)),
                _ => None,
            })
            .collect();
        assert_eq!(scores, [("1", 355.0), ("0", 405.0)]);
    }
}
