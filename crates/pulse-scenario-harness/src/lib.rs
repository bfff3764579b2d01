//! Host-side scenario test harness for scripted UI flows.
//!
//! Couples the app with a simulated clock and an in-memory display so
//! tests can move time forward deterministically.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::BinaryColor;
use png::{BitDepth, ColorType, Encoder};
use pulse_ui::test_display::TestDisplay;
use pulse_ui::{App, Button, InputEvent, Millis, PulseConfig};

/// Small helper that couples app, simulated clock, and display for scenario tests.
pub struct ScenarioHarness {
    app: App,
    clock: Millis,
    display: TestDisplay,
}

impl ScenarioHarness {
    /// Construct a harness around a caller-provided app at t=0.
    pub fn new(app: App) -> Self {
        Self {
            app,
            clock: 0,
            display: TestDisplay::default_size(),
        }
    }

    /// Construct a fresh app from `config`.
    pub fn with_config(config: PulseConfig) -> Self {
        Self::new(App::with_config(config))
    }

    /// Simulate a button press through the app input pipeline.
    pub fn press(&mut self, button: Button) -> bool {
        self.app.handle_input(InputEvent::Press(button))
    }

    /// Simulate a tap at display coordinates.
    pub fn tap(&mut self, x: i32, y: i32) -> bool {
        self.app
            .handle_input(InputEvent::Tap(embedded_graphics::prelude::Point::new(x, y)))
    }

    /// Move simulated time forward by `ms`, stopping at every timer deadline
    /// on the way so updates fire at their exact time.
    ///
    /// Returns true if any step requested a redraw.
    pub fn advance_by(&mut self, ms: Millis) -> bool {
        let target = self.clock.saturating_add(ms);
        let mut redraw = false;

        while let Some(deadline) = self.app.next_deadline() {
            if deadline > target {
                break;
            }
            self.clock = self.clock.max(deadline);
            redraw |= self.app.tick(self.clock);
        }

        self.clock = target;
        redraw |= self.app.tick(self.clock);
        redraw
    }

    /// Move simulated time forward by whole time units.
    pub fn advance_units(&mut self, units: u32) -> bool {
        let ms = self.app.config().units_to_ms(units);
        self.advance_by(ms)
    }

    /// Advance until running transitions have settled (bounded by one animation length).
    pub fn settle(&mut self) -> bool {
        let ms = self.app.config().animation_ms as Millis;
        self.advance_by(ms)
    }

    /// Current simulated time.
    pub fn now(&self) -> Millis {
        self.clock
    }

    /// Render the current UI screen.
    pub fn render(&mut self) {
        self.app
            .render(&mut self.display)
            .expect("scenario render should succeed");
    }

    /// Render and return elapsed wall time.
    pub fn render_timed(&mut self) -> Duration {
        let start = Instant::now();
        self.render();
        start.elapsed()
    }

    /// Render and assert wall-time budget in milliseconds.
    pub fn assert_render_budget_ms(&mut self, max_ms: u128, label: &str) {
        let elapsed = self.render_timed();
        assert!(
            elapsed.as_millis() <= max_ms,
            "{} render exceeded budget: {}ms > {}ms",
            label,
            elapsed.as_millis(),
            max_ms
        );
    }

    /// Access the app for assertions.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Mutable app access for direct tab switching.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Access the display for render assertions.
    pub fn display(&self) -> &TestDisplay {
        &self.display
    }

    /// Save the current framebuffer to a PNG (white = Off, black = On).
    pub fn save_screenshot_png(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let (width, height) = self.display.dimensions();
        let mut data = Vec::with_capacity((width * height) as usize);
        for pixel in self.display.pixels() {
            let value = match pixel {
                BinaryColor::On => 0u8,
                BinaryColor::Off => 255u8,
            };
            data.push(value);
        }

        let file = File::create(path).map_err(|e| e.to_string())?;
        let writer = BufWriter::new(file);
        let mut encoder = Encoder::new(writer, width, height);
        encoder.set_color(ColorType::Grayscale);
        encoder.set_depth(BitDepth::Eight);
        let mut png_writer = encoder.write_header().map_err(|e| e.to_string())?;
        png_writer
            .write_image_data(&data)
            .map_err(|e| e.to_string())
    }
}

impl Default for ScenarioHarness {
    fn default() -> Self {
        Self::new(App::new())
    }
}
