//! Immediate-mode rendering
//!
//! Draws the arena straight through macroquad's shape and text calls. The
//! simulation never calls in here; the driver hands over a finished state.

pub mod shapes;

use std::path::Path;

use macroquad::text::{Font, TextParams, draw_text_ex, load_ttf_font, measure_text};
use macroquad::window::clear_background;

use crate::error::StartupError;
use crate::sim::GameState;

/// Score text size (pixels)
pub const SCORE_FONT_SIZE: u16 = 18;
/// Gap between the score baseline and the bottom of the window
pub const SCORE_BOTTOM_OFFSET: f32 = 30.0;

/// Holds the font loaded once at startup
pub struct Renderer {
    font: Option<Font>,
}

impl Renderer {
    /// Use macroquad's built-in font, or load `font_path` if given
    pub async fn load(font_path: Option<&Path>) -> Result<Self, StartupError> {
        let font = match font_path {
            Some(path) => {
                let font = load_ttf_font(&path.to_string_lossy())
                    .await
                    .map_err(|err| StartupError::FontLoad {
                        path: path.to_path_buf(),
                        reason: err.to_string(),
                    })?;
                log::info!("Loaded font {}", path.display());
                Some(font)
            }
            None => None,
        };
        Ok(Self { font })
    }

    /// Draw every live entity and the score
    pub fn draw_frame(&self, state: &GameState) {
        clear_background(shapes::background());
        for entity in &state.entities {
            shapes::draw_entity(entity);
        }
        self.draw_score(state.score, state.width, state.height);
    }

    fn draw_score(&self, score: u64, width: f32, height: f32) {
        let text = format!("Score {score}");
        let dims = measure_text(&text, self.font.as_ref(), SCORE_FONT_SIZE, 1.0);
        draw_text_ex(
            &text,
            width / 2.0 - dims.width / 2.0,
            height - SCORE_BOTTOM_OFFSET,
            TextParams {
                font: self.font.as_ref(),
                font_size: SCORE_FONT_SIZE,
                color: shapes::score_text(),
                ..Default::default()
            },
        );
    }
}
