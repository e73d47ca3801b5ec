use crate::config::{save_settings_atomic, Paths, Settings};
use crate::input::{collect_input_nonblocking, map_key, KeyInput};
use crate::render::{draw_device, Lcd, Terminal};
use crate::sim::Device;
use log::info;
use std::time::{Duration, Instant};

// Simulated milliseconds per fixed step, before the speed multiplier.
const SIM_STEP_MS: u64 = 20;

pub(crate) struct App {
    // what the settings file holds; flags never end up in here
    stored: Settings,
    settings: Settings,
    paths: Paths,
    device: Device<Lcd>,
    term: Terminal,
    should_quit: bool,
}

impl App {
    fn init(stored: Settings, settings: Settings, paths: Paths) -> anyhow::Result<Self> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        info!("seed {seed}, speed x{}", settings.speed);
        let device = Device::new(Some(Lcd::new()), seed);
        let term = Terminal::begin()?;

        Ok(Self {
            stored,
            settings,
            paths,
            device,
            term,
            should_quit: false,
        })
    }

    fn run(&mut self) -> anyhow::Result<()> {
        let fps = self.settings.fps_cap.clamp(5, 120);
        let frame_dt = Duration::from_secs_f32(1.0 / fps as f32);
        let sim_step = Duration::from_millis(SIM_STEP_MS);
        let sim_ms = SIM_STEP_MS * u64::from(self.settings.speed.max(1));

        let mut last_frame = Instant::now();
        let mut sim_accum = Duration::ZERO;

        while !self.should_quit {
            if self.term.resize_if_needed()? {
                self.term.present(false)?;
            }

            // input
            for key in collect_input_nonblocking(frame_dt)? {
                match map_key(key) {
                    Some(KeyInput::Quit) => {
                        self.should_quit = true;
                        break;
                    }
                    Some(KeyInput::Press(button)) => self.device.press(button),
                    None => {}
                }
            }

            // sim fixed-step
            let now = Instant::now();
            let real_dt = now.saturating_duration_since(last_frame);
            last_frame = now;
            sim_accum = sim_accum.saturating_add(real_dt);

            while sim_accum >= sim_step {
                self.device.tick(sim_ms);
                sim_accum = sim_accum.saturating_sub(sim_step);
            }

            // render
            draw_device(&mut self.term.cur, &self.device, &self.settings);
            self.term.present(true)?;

            // frame cap
            spin_sleep(frame_dt, Instant::now());
        }
        Ok(())
    }
}

/// Runs with the effective `settings` and writes back only `stored`, so
/// command-line overrides last for this run alone.
pub(crate) fn run(stored: Settings, settings: Settings, paths: Paths) -> anyhow::Result<()> {
    let mut app = App::init(stored, settings, paths)?;
    let result = app.run();
    app.term.end()?;
    save_settings_atomic(&app.paths.settings_path, &app.stored)?;
    info!("bye");
    result
}

/* -----------------------------
   Frame pacing helper
------------------------------ */

fn spin_sleep(target: Duration, now: Instant) {
    let end = now + target;
    loop {
        let t = Instant::now();
        if t >= end {
            break;
        }
        let left = end - t;
        if left > Duration::from_millis(2) {
            std::thread::sleep(Duration::from_millis(1));
        } else {
            std::hint::spin_loop();
        }
    }
}
