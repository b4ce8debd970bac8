//! Pew sound pool
//!
//! Several copies of the same sound are pre-allocated and played in turn so
//! rapid fire never cuts off a shot that is still ringing.

/// Cycling index over a fixed-size pool
#[derive(Debug, Clone, Default)]
pub struct RoundRobin {
    len: usize,
    index: usize,
}

impl RoundRobin {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Current slot, advancing to the next. None for an empty pool.
    pub fn advance(&mut self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let current = self.index;
        self.index = (self.index + 1) % self.len;
        Some(current)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::PewPool;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::HtmlAudioElement;

    use super::RoundRobin;
    use crate::game::SoundSink;
    use crate::settings::Settings;

    /// `HtmlAudioElement` pool for the shot sound
    pub struct PewPool {
        sounds: Vec<HtmlAudioElement>,
        cursor: RoundRobin,
        volume: f32,
    }

    impl PewPool {
        /// Pre-allocate the pool. Elements that fail to construct are skipped.
        pub fn new(src: &str, settings: &Settings) -> Self {
            let volume = settings.effective_volume();
            let mut sounds = Vec::with_capacity(settings.pew_pool_size);
            for _ in 0..settings.pew_pool_size {
                match HtmlAudioElement::new_with_src(src) {
                    Ok(sound) => {
                        sound.set_volume(volume as f64);
                        sound.set_preload("auto");
                        sounds.push(sound);
                    }
                    Err(e) => log::warn!("Could not create pew sound: {:?}", e),
                }
            }
            if sounds.is_empty() {
                log::warn!("No pew sounds available - audio disabled");
            }
            let cursor = RoundRobin::new(sounds.len());
            Self {
                sounds,
                cursor,
                volume,
            }
        }
    }

    impl SoundSink for PewPool {
        fn play_shot(&mut self) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(index) = self.cursor.advance() else {
                return;
            };
            let sound = &self.sounds[index];
            // Rewind so a reused element starts from the top
            sound.set_current_time(0.0);
            match sound.play() {
                Ok(promise) => spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("Could not play pew sound: {:?}", e);
                    }
                }),
                Err(e) => log::warn!("Could not play pew sound: {:?}", e),
            }
        }
    }
}
