//! Score, speed and game-over overlay

/// Everything the page shows outside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub score: u32,
    pub best: u32,
    pub speed_multiplier: f32,
    pub game_over: bool,
}

pub fn score_label(score: u32) -> String {
    score.to_string()
}

pub fn high_score_label(best: u32) -> String {
    format!("🏆 High Score: {best}")
}

pub fn speed_label(multiplier: f32) -> String {
    format!("⚡ Speed: {multiplier:.1}x")
}

#[cfg(target_arch = "wasm32")]
pub use dom::Hud;

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    /// Page elements backing the HUD. Missing elements are skipped.
    pub struct Hud {
        current_score: Option<HtmlElement>,
        high_score: Option<HtmlElement>,
        speed: Option<HtmlElement>,
        game_over: Option<HtmlElement>,
        last: Option<HudSnapshot>,
    }

    impl Hud {
        pub fn new(document: &Document) -> Self {
            Self {
                current_score: lookup(document, "currentScore"),
                high_score: lookup(document, "highScore"),
                speed: lookup(document, "speedDisplay"),
                game_over: lookup(document, "gameOverImage"),
                last: None,
            }
        }

        /// Push a snapshot to the page, touching only what changed
        pub fn update(&mut self, snapshot: HudSnapshot) {
            let last = self.last;
            if last == Some(snapshot) {
                return;
            }

            if last.map_or(true, |l| l.score != snapshot.score) {
                set_text(&self.current_score, &score_label(snapshot.score));
            }
            if last.map_or(true, |l| l.best != snapshot.best) {
                set_text(&self.high_score, &high_score_label(snapshot.best));
            }
            // Compared as shown, so sub-display changes do not touch the page
            let speed = speed_label(snapshot.speed_multiplier);
            if last.map_or(true, |l| speed_label(l.speed_multiplier) != speed) {
                set_text(&self.speed, &speed);
            }
            if last.map_or(true, |l| l.game_over != snapshot.game_over) {
                let display = if snapshot.game_over { "block" } else { "none" };
                if let Some(el) = &self.game_over {
                    if let Err(e) = el.style().set_property("display", display) {
                        log::warn!("game over overlay: {:?}", e);
                    }
                }
            }

            self.last = Some(snapshot);
        }
    }

    fn lookup(document: &Document, id: &str) -> Option<HtmlElement> {
        let el = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if el.is_none() {
            log::warn!("missing #{id}, HUD field disabled");
        }
        el
    }

    fn set_text(el: &Option<HtmlElement>, text: &str) {
        if let Some(el) = el {
            el.set_inner_text(text);
        }
    }
}
