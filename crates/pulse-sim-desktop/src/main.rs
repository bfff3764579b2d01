//! Desktop SDL simulator for the Pulse dashboard.
//!
//! Drives the app from a wall clock; timed updates and transitions play
//! out in real time.

use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    sdl2::{Keycode, MouseButton},
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use pulse_ui::{App, Button, InputEvent, Millis, PulseConfig, RearmPolicy};
use pulse_ui::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "pulse-sim", about = "Desktop simulator for the Pulse HR dashboard")]
struct Args {
    /// Length of one scheduling time unit in milliseconds
    #[arg(long, default_value_t = PulseConfig::DEFAULT_TIME_UNIT_MS)]
    time_unit_ms: u32,

    /// Transition length in milliseconds (0 disables animation)
    #[arg(long, default_value_t = PulseConfig::DEFAULT_ANIMATION_MS)]
    animation_ms: u32,

    /// Arm the timed updates only the first time the dashboard is shown
    #[arg(long)]
    arm_once: bool,

    /// Window pixel scale
    #[arg(long, default_value_t = 1)]
    scale: u32,
}

impl Args {
    fn config(&self) -> Result<PulseConfig, pulse_ui::ConfigError> {
        let policy = if self.arm_once {
            RearmPolicy::OncePerProcess
        } else {
            RearmPolicy::OnEveryEnter
        };
        PulseConfig::builder()
            .time_unit_ms(self.time_unit_ms)
            .animation_ms(self.animation_ms)
            .rearm_policy(policy)
            .build()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config()?;
    log::info!("[SIM] starting with {:?}", config);

    let output_settings = OutputSettingsBuilder::new()
        .scale(args.scale.max(1))
        .theme(BinaryColorTheme::Inverted)
        .build();
    let mut display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT));
    let mut window = Window::new("Pulse Dashboard", &output_settings);

    let started = Instant::now();
    let mut app = App::with_config(config);

    // Initial render
    app.render(&mut display)?;
    window.update(&display);

    println!("Pulse Dashboard Simulator");
    println!("Controls:");
    println!("  Left / Right / A / D - Switch tab");
    println!("  Click tab bar        - Switch tab");
    println!("  Escape               - Quit");

    loop {
        let events = window.events().collect::<Vec<_>>();
        let mut redraw = false;

        for event in events {
            match event {
                SimulatorEvent::Quit => {
                    return Ok(());
                }
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Escape,
                    ..
                } => {
                    return Ok(());
                }
                SimulatorEvent::KeyDown { keycode, .. } => {
                    if let Some(btn) = keycode_to_button(keycode) {
                        redraw |= app.handle_input(InputEvent::Press(btn));
                    }
                }
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    point,
                } => {
                    redraw |= app.handle_input(InputEvent::Tap(point));
                }
                _ => {}
            }
        }

        let now = started.elapsed().as_millis() as Millis;
        redraw |= app.tick(now);

        if redraw {
            app.render(&mut display)?;
        }
        window.update(&display);
        thread::sleep(FRAME);
    }
}

fn keycode_to_button(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::Left | Keycode::A => Some(Button::Left),
        Keycode::Right | Keycode::D => Some(Button::Right),
        Keycode::Return | Keycode::Space => Some(Button::Confirm),
        Keycode::Backspace => Some(Button::Back),
        _ => None,
    }
}
