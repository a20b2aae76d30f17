//! Navex entry point
//!
//! Parses the command line, opens the window and runs the frame loop until
//! the player is destroyed or the window is closed.

use macroquad::Window;
use macroquad::time::get_frame_time;
use macroquad::window::{Conf, next_frame};

use navex::consts::{ARENA_HEIGHT, ARENA_WIDTH, TARGET_FPS};
use navex::platform::{FrameLimiter, WindowInput, poll_input, sim_dt};
use navex::renderer::Renderer;
use navex::settings::{MISSING_ARGS_MESSAGE, Settings, is_missing_argument};
use navex::sim::{GameState, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: String::from("navex"),
        window_width: ARENA_WIDTH as i32,
        window_height: ARENA_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let settings = match Settings::from_args(std::env::args_os()) {
        Ok(settings) => settings,
        Err(err) => {
            if is_missing_argument(&err) {
                println!("{MISSING_ARGS_MESSAGE}");
            }
            // Usage goes to stdout and no window is opened
            println!("{}", err.render());
            return;
        }
    };

    Window::from_config(window_conf(), run(settings));
}

async fn run(settings: Settings) {
    let seed = settings.resolve_seed();
    log::info!(
        "Navex starting: max_missiles={} interval={}ms seed={}",
        settings.sim.max_missiles,
        settings.sim.missile_interval_ms,
        seed
    );

    let renderer = match Renderer::load(settings.font.as_deref()).await {
        Ok(renderer) => renderer,
        Err(err) => {
            log::error!("{err}");
            eprintln!("navex: {err}");
            std::process::exit(1);
        }
    };

    let mut input_source = WindowInput::install();
    let mut limiter = FrameLimiter::new(TARGET_FPS);
    let mut state = GameState::new(settings.sim, seed);

    while state.is_running() {
        let dt = sim_dt(get_frame_time());
        let input = poll_input(&mut input_source);
        tick(&mut state, &input, dt);

        if state.is_running() {
            renderer.draw_frame(&state);
        }
        limiter.wait();
        next_frame().await;
    }

    log::info!("Run over after {} ticks", state.time_ticks);
    println!("FINAL SCORE: {}", state.score);
}
