//! Sports Medley headless driver
//!
//! Runs one full match with scripted players at the configured step rate,
//! logging every rotation, score and the final results.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;

    use sports_medley::Settings;
    use sports_medley::audio::LogAudio;
    use sports_medley::consts::{ARENA_HEIGHT, ARENA_WIDTH};
    use sports_medley::platform::{GamepadId, ScriptedInput};
    use sports_medley::sim::{CollisionEvent, Game, PawnId, RoundChange, StepEvent, Team, World};
    use sports_medley::ui::LogPresenter;

    env_logger::init();
    log::info!("Sports Medley (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(std::path::Path::new(&path)),
        None => Settings::default(),
    };
    let step_ms = 1000.0 / settings.step_rate_hz;

    let mut game = Game::new(
        settings,
        ScriptedInput::new(),
        LogPresenter,
        LogAudio::new(),
    );

    let center = Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0);
    let blue = game.add_player(Team::Blue, GamepadId(0), center - Vec2::new(200.0, 0.0));
    let red = game.add_player(Team::Red, GamepadId(1), center + Vec2::new(200.0, 0.0));
    let flag = game.spawn_flag(center);
    game.add_goal(Team::Blue);
    game.add_goal(Team::Red);

    let body_of = |world: &World, pawn: PawnId| {
        world
            .bodies
            .iter()
            .find(|b| b.pawn == Some(pawn))
            .map(|b| b.id)
    };
    let (Some(blue_body), Some(red_body), Some(flag_body)) = (
        body_of(game.world(), blue),
        body_of(game.world(), red),
        body_of(game.world(), flag),
    ) else {
        log::error!("Spawned pawns are missing their bodies");
        return;
    };

    game.input_mut().set_stick(GamepadId(0), Vec2::X);
    game.input_mut().set_stick(GamepadId(1), -Vec2::X);

    let mut frame: u64 = 0;
    loop {
        let timestamp = frame as f64 * step_ms;
        if game.on_step(&StepEvent { timestamp }) == RoundChange::Ended {
            break;
        }

        // Blue grabs the flag every 4s, Red tackles every 7s
        if frame % 120 == 0 {
            game.on_collision(&CollisionEvent::single(blue_body, flag_body));
        }
        if frame % 210 == 0 {
            game.on_collision(&CollisionEvent::single(red_body, blue_body));
        }
        if frame % 30 == 0 {
            for marker in game.after_render() {
                log::trace!(
                    "Player {} ({}) at {:?}{}",
                    marker.index,
                    marker.color(),
                    marker.position,
                    if marker.carrying_flag { " carrying the flag" } else { "" }
                );
            }
        }

        frame += 1;
    }

    log::info!(
        "Match finished after {} steps, {} sounds played",
        frame,
        game.audio().played()
    );
    match serde_json::to_string_pretty(game.session()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not snapshot session: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives `Game` directly
}
