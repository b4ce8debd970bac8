//! Canvas 2D presentation adapter

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use super::hud;
use crate::error::InitError;
use crate::game::Presenter;
use crate::settings::Settings;
use crate::sim::{FallingObject, GameState, ObjectKind};

const PROJECTILE_COLOR: &str = "#00ff88";
/// Objects closer than this to the left edge glow red
const WARNING_X: f32 = 100.0;
const PARTICLE_SIZE: f64 = 4.0;

/// Draws the game onto a `<canvas>` and mirrors HUD state into the DOM
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    document: Document,
    turret_image: Option<HtmlImageElement>,
    show_particles: bool,
}

impl CanvasRenderer {
    /// Attach to the canvas. Fails if no 2D context is available.
    pub fn new(
        canvas: HtmlCanvasElement,
        document: Document,
        settings: &Settings,
    ) -> Result<Self, InitError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(InitError::NoContext2d)?;

        Ok(Self {
            canvas,
            ctx,
            document,
            turret_image: None,
            show_particles: settings.particles,
        })
    }

    /// Start loading the turret sprite. Until it loads (or if it never
    /// does) a placeholder is drawn.
    pub fn load_turret_image(&mut self, src: &str) {
        let image = match HtmlImageElement::new() {
            Ok(image) => image,
            Err(e) => {
                log::warn!("Could not create turret image: {:?}", e);
                return;
            }
        };

        let onload = Closure::<dyn FnMut()>::new(|| log::info!("Turret image loaded successfully"));
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn FnMut()>::new(|| log::warn!("Turret image failed to load"));
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        image.set_src(src);
        self.turret_image = Some(image);
    }

    /// Match the canvas backing store to the given size
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill(&self, color: &str, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    /// Faint "$PEW" lettering behind the action
    fn draw_background(&self, width: f64, height: f64) {
        let ctx = &self.ctx;
        let font_size = width.min(height) * 0.3;

        ctx.set_fill_style_str("rgba(255, 255, 255, 0.1)");
        ctx.set_font(&format!("bold {font_size}px Arial, sans-serif"));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text("$PEW", width / 2.0, height / 2.0);

        ctx.set_shadow_color("rgba(255, 255, 255, 0.2)");
        ctx.set_shadow_blur(20.0);
        let _ = ctx.fill_text("$PEW", width / 2.0, height / 2.0);
        ctx.set_shadow_blur(0.0);

        // Corner watermarks
        ctx.set_font(&format!("bold {}px Arial, sans-serif", font_size * 0.3));
        ctx.set_fill_style_str("rgba(255, 255, 255, 0.05)");
        let corners = [
            ("left", "top", 20.0, 20.0),
            ("right", "top", width - 20.0, 20.0),
            ("left", "bottom", 20.0, height - 20.0),
            ("right", "bottom", width - 20.0, height - 20.0),
        ];
        for (align, baseline, x, y) in corners {
            ctx.set_text_align(align);
            ctx.set_text_baseline(baseline);
            let _ = ctx.fill_text("$PEW", x, y);
        }

        ctx.set_text_align("left");
        ctx.set_text_baseline("alphabetic");
    }

    fn draw_turret(&self, state: &GameState) {
        let t = &state.turret;
        let (x, y, w, h) = (
            t.pos.x as f64,
            t.pos.y as f64,
            t.size.x as f64,
            t.size.y as f64,
        );

        if let Some(image) = self
            .turret_image
            .as_ref()
            .filter(|img| img.complete() && img.natural_width() != 0)
        {
            if self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h)
                .is_ok()
            {
                return;
            }
            log::warn!("Error drawing turret image, using placeholder");
        }

        // Placeholder: body, barrel, panel
        self.fill("#333333", x, y, w, h);
        self.fill("#666666", x + w - 10.0, y + h / 2.0 - 5.0, 15.0, 10.0);
        self.fill("#ffffff", x + 5.0, y + 5.0, w - 15.0, h - 10.0);
    }

    fn draw_projectiles(&self, state: &GameState) {
        for shot in &state.projectiles {
            let (x, y, w, h) = (
                shot.pos.x as f64,
                shot.pos.y as f64,
                shot.size.x as f64,
                shot.size.y as f64,
            );
            self.fill(PROJECTILE_COLOR, x, y, w, h);
            // Glow pass
            self.ctx.set_shadow_color(PROJECTILE_COLOR);
            self.ctx.set_shadow_blur(10.0);
            self.ctx.fill_rect(x, y, w, h);
            self.ctx.set_shadow_blur(0.0);
        }
    }

    fn draw_object(&self, obj: &FallingObject) {
        let ctx = &self.ctx;
        let center = obj.bounds().center();
        let (w, h) = (obj.size.x as f64, obj.size.y as f64);
        let (x, y) = (-w / 2.0, -h / 2.0);

        ctx.save();
        let _ = ctx.translate(center.x as f64, center.y as f64);
        let _ = ctx.rotate(obj.rotation as f64);

        if obj.pos.x < WARNING_X {
            ctx.set_shadow_color("#ff0000");
            ctx.set_shadow_blur(20.0);
        }

        match obj.kind {
            ObjectKind::Asteroid => {
                self.fill("#666666", x, y, w, h);
                self.fill("#888888", x + 5.0, y + 5.0, w - 10.0, h - 10.0);
            }
            ObjectKind::Enemy => {
                self.fill("#333333", x, y, w, h);
                self.fill("#555555", x + 5.0, y + 5.0, w - 10.0, h - 10.0);
                // Eyes
                self.fill("#ffffff", x + w / 4.0, y + h / 4.0, 3.0, 3.0);
                self.fill("#ffffff", x + 3.0 * w / 4.0 - 3.0, y + h / 4.0, 3.0, 3.0);
            }
            ObjectKind::Powerup => {
                self.fill("#ffffff", x, y, w, h);
                // Border
                self.fill("#000000", x, y, w, 2.0);
                self.fill("#000000", x, y + h - 2.0, w, 2.0);
                self.fill("#000000", x, y, 2.0, h);
                self.fill("#000000", x + w - 2.0, y, 2.0, h);
                // Plus sign
                self.fill("#000000", x + w / 2.0 - 2.0, y + h / 4.0, 4.0, h / 2.0);
                self.fill("#000000", x + w / 4.0, y + h / 2.0 - 2.0, w / 2.0, 4.0);
            }
        }

        ctx.set_shadow_blur(0.0);
        ctx.restore();
    }

    fn draw_particles(&self, state: &GameState) {
        let half = PARTICLE_SIZE / 2.0;
        for p in &state.particles {
            self.ctx.save();
            self.ctx.set_global_alpha(p.alpha as f64);
            self.fill(
                &p.css_color(),
                p.pos.x as f64 - half,
                p.pos.y as f64 - half,
                PARTICLE_SIZE,
                PARTICLE_SIZE,
            );
            self.ctx.restore();
        }
    }
}

impl Presenter for CanvasRenderer {
    fn draw(&mut self, state: &GameState) {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        self.fill("#000000", 0.0, 0.0, width, height);
        self.draw_background(width, height);
        self.draw_turret(state);
        self.draw_projectiles(state);
        for obj in &state.objects {
            self.draw_object(obj);
        }
        if self.show_particles {
            self.draw_particles(state);
        }
    }

    fn score_changed(&mut self, score: u64) {
        hud::set_text(&self.document, hud::SCORE_ID, &score.to_string());
    }

    fn hide_controls(&mut self) {
        hud::hide_controls(&self.document);
    }

    fn show_controls(&mut self) {
        hud::show_controls(&self.document);
    }

    fn show_game_over(&mut self, final_score: u64) {
        hud::set_text(&self.document, hud::FINAL_SCORE_ID, &final_score.to_string());
        hud::set_display(&self.document, hud::GAME_OVER_ID, "block");
    }

    fn hide_game_over(&mut self) {
        hud::set_display(&self.document, hud::GAME_OVER_ID, "none");
    }
}
