//! Sound effects backed by the page's `<audio>` elements

use crate::simulation::Cue;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlAudioElement};

struct Sound {
    element: HtmlAudioElement,
    volume: f64,
}

/// The three cue sounds. A missing element silences its cue.
pub struct SoundBank {
    flap: Option<Sound>,
    crash: Option<Sound>,
    score: Option<Sound>,
    unlocked: bool,
}

impl SoundBank {
    pub fn new(document: &Document) -> Self {
        Self {
            flap: lookup(document, "flapSound", 0.3),
            crash: lookup(document, "collisionSound", 0.5),
            score: lookup(document, "scoreSound", 0.4),
            unlocked: false,
        }
    }

    /// Prime every sound from inside a user gesture so later plays are allowed
    pub fn unlock(&mut self) {
        if self.unlocked {
            return;
        }
        self.unlocked = true;

        for sound in [&self.flap, &self.crash, &self.score].into_iter().flatten() {
            let element = sound.element.clone();
            match sound.element.play() {
                Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("audio unlock rejected: {:?}", e);
                    }
                    if let Err(e) = element.pause() {
                        log::warn!("audio pause failed: {:?}", e);
                    }
                    element.set_current_time(0.0);
                }),
                Err(e) => log::warn!("audio unlock failed: {:?}", e),
            }
        }
        log::debug!("audio unlocked");
    }

    pub fn play(&self, cue: Cue) {
        let sound = match cue {
            Cue::Flap => &self.flap,
            Cue::Score => &self.score,
            Cue::Crash => &self.crash,
        };
        let Some(sound) = sound else {
            return;
        };

        sound.element.set_current_time(0.0);
        sound.element.set_volume(sound.volume);
        match sound.element.play() {
            Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("{:?} sound rejected: {:?}", cue, e);
                }
            }),
            Err(e) => log::warn!("{:?} sound failed: {:?}", cue, e),
        }
    }
}

fn lookup(document: &Document, id: &str, volume: f64) -> Option<Sound> {
    let element = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok());
    match element {
        Some(element) => Some(Sound { element, volume }),
        None => {
            log::warn!("missing #{id}, sound disabled");
            None
        }
    }
}
