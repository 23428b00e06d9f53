mod render;
mod sim;

use std::sync::{Arc, Mutex};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use render::GpuState;
use sim::{CameraBehaviour, SimInput, SimulatedCamera};
use tree_core::{
    Clock, DetectorLink, FrameDriver, ModeController, Platform, SceneConfig, SessionContext,
    SystemClock,
};

struct Options {
    config: SceneConfig,
    camera: CameraBehaviour,
}

fn parse_options() -> Options {
    let mut config = SceneConfig::default();
    let mut camera = CameraBehaviour::default();
    if std::env::var("TREE_PLATFORM").is_ok_and(|v| v.eq_ignore_ascii_case("mobile")) {
        config.platform = Platform::Mobile;
    }
    for arg in std::env::args().skip(1) {
        if arg == "--mobile" {
            config.platform = Platform::Mobile;
        } else if let Some(v) = arg.strip_prefix("--seed=") {
            match v.parse() {
                Ok(seed) => config.seed = seed,
                Err(_) => log::warn!("ignoring bad seed {v:?}"),
            }
        } else if let Some(v) = arg.strip_prefix("--camera=") {
            match CameraBehaviour::parse(v) {
                Some(b) => camera = b,
                None => log::warn!("unknown camera behaviour {v:?}"),
            }
        } else {
            log::warn!("unrecognized argument {arg:?}");
        }
    }
    Options { config, camera }
}

fn set_input(input: &Mutex<SimInput>, f: impl FnOnce(&mut SimInput)) {
    if let Ok(mut guard) = input.lock() {
        f(&mut guard);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let Options { config, camera } = parse_options();
    log::info!(
        "platform {:?}, seed {}, camera {:?}",
        config.platform,
        config.seed,
        camera
    );

    let clock = SystemClock::new();
    let sim_input = Arc::new(Mutex::new(SimInput::default()));
    let link = DetectorLink::spawn(
        SimulatedCamera::new(Arc::clone(&sim_input), camera),
        clock.now_ms(),
        config.detector_timeout_ms,
    );
    let controller = ModeController::new(config.tuning());
    let mut ctx = SessionContext::new(config);
    let mut driver = FrameDriver::new(clock, controller, link);

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Gesture Tree")
        .build(&event_loop)?;

    let mut state = pollster::block_on(GpuState::new(&window))?;
    let mut last_title = String::new();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => state.resize(size),
            WindowEvent::CloseRequested => {
                driver.shutdown();
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let x = position.x as f32 / state.width as f32;
                let y = position.y as f32 / state.height as f32;
                set_input(&sim_input, |i| {
                    i.palm = glam::Vec2::new(x, y).clamp(glam::Vec2::ZERO, glam::Vec2::ONE)
                });
            }
            WindowEvent::CursorEntered { .. } => set_input(&sim_input, |i| i.present = true),
            WindowEvent::CursorLeft { .. } => set_input(&sim_input, |i| i.present = false),
            WindowEvent::KeyboardInput { event, .. } => {
                let pressed = event.state == ElementState::Pressed;
                match event.logical_key.as_ref() {
                    Key::Named(NamedKey::Escape) if pressed => {
                        driver.shutdown();
                        elwt.exit();
                    }
                    Key::Character(c) => match c.to_ascii_lowercase().as_str() {
                        "p" => set_input(&sim_input, |i| i.pinch = pressed),
                        "v" => set_input(&sim_input, |i| i.peace = pressed),
                        "o" => set_input(&sim_input, |i| i.open = pressed),
                        "n" if pressed && !event.repeat => {
                            ctx.ingest_photo();
                        }
                        _ => {}
                    },
                    _ => {}
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            ctx.rig.camera.aspect = state.aspect();
            if driver.step(&mut ctx).is_none() {
                return;
            }

            let mut title = format!("Gesture Tree [{}]", ctx.gesture.mode.as_str());
            if let Some(label) = ctx.gesture.label {
                title.push_str(" - ");
                title.push_str(label.as_str());
            }
            if driver.detector_pending() {
                title.push_str(" - starting camera...");
            } else if let Some(failure) = driver.detector_failure() {
                title.push_str(" - ");
                title.push_str(failure.advisory());
            }
            if title != last_title {
                state.window.set_title(&title);
                last_title = title;
            }

            match state.render(&ctx) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    driver.shutdown();
                    elwt.exit();
                }
                Err(e) => log::debug!("[render] skipped frame: {e}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
