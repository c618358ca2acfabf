use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use sdl2::event::Event;
use sdl2::pixels::Color;
use tracing::info;
use tracing_subscriber::EnvFilter;

use guiapp::backend::sdl::{SdlDrawingAdapter, SdlMouse};
use guiapp::config::AppConfig;
use guiapp::gui::{DefaultDrawVisitor, DefaultUpdateVisitor, GuiConstructor, MenuCreator};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Config from the path given as the first argument, else the default location
fn load_config() -> Result<AppConfig, String> {
    let config = match std::env::args().nth(1) {
        Some(path) => AppConfig::load_from_file(path),
        None => AppConfig::load_or_default(),
    };
    config.map_err(|e| format!("Failed to load config: {}", e))
}

fn main() -> Result<(), String> {
    init_logging();
    let config = load_config()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut event_pump = sdl_context.event_pump()?;

    // The exit button clears this flag; the loop checks it once per frame
    let running = Rc::new(Cell::new(true));
    let exit_flag = Rc::clone(&running);
    let mut gui = GuiConstructor::with_layout(config.layout.clone())
        .instantiate(&config.menu, Box::new(move || exit_flag.set(false)))
        .map_err(|e| format!("Failed to build menu: {}", e))?;

    info!(
        width = config.window.width,
        height = config.window.height,
        menu = %config.menu,
        "window open"
    );

    let background = Color::RGB(100, 149, 237);
    let frame_time = config.frame_time();
    let mut last_frame = Instant::now();

    'running: while running.get() {
        for event in event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                break 'running;
            }
        }

        let frame_start = Instant::now();
        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        // Update before draw so a screen change shows up this frame
        gui.update(&mut DefaultUpdateVisitor::new(&SdlMouse::new(&event_pump)), dt);

        canvas.set_draw_color(background);
        canvas.clear();
        gui.draw(&mut DefaultDrawVisitor::new(&mut SdlDrawingAdapter::new(&mut canvas)))?;
        canvas.present();

        if let Some(budget) = frame_time {
            let elapsed = frame_start.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
    }

    info!("shutting down");
    Ok(())
}
