//! Headless demo: plays the attack-lifecycle scenario end to end.
//!
//! Runs every step to quiescence at roughly frame cadence, painting
//! through the logging surface. Set `RUST_LOG=debug` for per-frame output.

use std::thread;

use web_time::{Duration, Instant};

use breachboard::controller::StepController;
use breachboard::render::{LogSurface, RenderSurface};

const FRAME: Duration = Duration::from_millis(16);
/// Hold on each finished step before advancing.
const STEP_DWELL: Duration = Duration::from_millis(600);

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut controller = StepController::new(Instant::now());
    let mut surface = LogSurface;

    loop {
        let story = controller.story();
        log::info!(
            "== step {}/{}: {}",
            controller.step() + 1,
            controller.step_count(),
            story.sentence(0),
        );

        // Drive the step's program to quiescence.
        while controller.tick(Instant::now()) {
            surface.paint(&controller.frame());
            thread::sleep(FRAME);
        }
        surface.paint(&controller.frame());

        if controller.story().has_second_sentence() {
            log::info!("   {}", controller.story().sentence(1));
        }
        if !controller.story().caption.is_empty() {
            log::info!("   [{}]", controller.story().caption);
        }

        thread::sleep(STEP_DWELL);
        if !controller.next(Instant::now()) {
            break;
        }
    }
    log::info!("scenario complete");
}
