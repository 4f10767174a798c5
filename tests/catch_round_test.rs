//! Full-round tests for Fruit Catcher and Coin Catcher, driven through the
//! public API the way the frontend drives them: input events, then frame ticks.

use arcade::config::Config;
use arcade::games::{catch, ActiveGame, CatchGame, CatchInput, GameKind};
use arcade::{EndReason, RoundSettings, ScenePhase, SoundCue, PHYSICS_TICK_MS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Enough frames to outlast a default 30s round.
const MAX_FRAMES: usize = 2_000;

fn catch_game(game: &mut ActiveGame) -> &mut CatchGame {
    match game {
        ActiveGame::Catch(g) => g,
        other => panic!("expected a catch scene, got {:?}", other.kind()),
    }
}

/// Steer the basket's catching strip toward `x_center`.
fn steer_toward(game: &mut CatchGame, x_center: f64) {
    let hitbox = game.player_hitbox();
    let diff = x_center - hitbox.center().0;
    let input = if diff > 8.0 {
        CatchInput::Right
    } else if diff < -8.0 {
        CatchInput::Left
    } else {
        CatchInput::Stop
    };
    catch::process_input(game, input);
}

/// Play frames until the round ends, letting `pilot` press keys each frame.
fn play_round<F>(game: &mut ActiveGame, rng: &mut ChaCha8Rng, mut pilot: F)
where
    F: FnMut(&mut CatchGame),
{
    for _ in 0..MAX_FRAMES {
        if game.phase() == ScenePhase::Over {
            return;
        }
        pilot(catch_game(game));
        game.tick(PHYSICS_TICK_MS, rng);
    }
    panic!("round never ended");
}

fn start(kind: GameKind, settings: RoundSettings) -> ActiveGame {
    let mut game = ActiveGame::start(kind, settings);
    assert_eq!(game.phase(), ScenePhase::WaitingToStart);
    catch::process_input(catch_game(&mut game), CatchInput::Start);
    assert_eq!(game.phase(), ScenePhase::Running);
    game
}

#[test]
fn fruit_round_tracking_the_apple_wins() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut game = start(GameKind::Fruit, RoundSettings::default());

    play_round(&mut game, &mut rng, |g| {
        let apple = g.targets[0].bounds();
        steer_toward(g, apple.center().0);
    });

    let results = game.results().expect("results after round");
    assert_eq!(results.reason, EndReason::TimeUp);
    assert!(results.score >= 10, "score was {}", results.score);
    assert!(results.won());
    assert_eq!(results.message(), "You did the thing!");
}

#[test]
fn fruit_round_dodging_the_apple_loses() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut game = start(GameKind::Fruit, RoundSettings::default());

    play_round(&mut game, &mut rng, |g| {
        let apple = g.targets[0].bounds();
        // Park on the far side of the field
        let input = if apple.center().0 < 250.0 {
            CatchInput::Right
        } else {
            CatchInput::Left
        };
        catch::process_input(g, input);
    });

    let results = game.results().expect("results after round");
    assert_eq!(results.score, 0);
    assert!(!results.won());
    assert_eq!(results.message(), "Better luck next time!");
}

#[test]
fn coin_round_chasing_lowest_coin_wins() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut game = start(GameKind::Coin, RoundSettings::default());

    play_round(&mut game, &mut rng, |g| {
        let lowest = g
            .targets
            .iter()
            .filter(|t| t.y < 470.0)
            .max_by(|a, b| a.y.total_cmp(&b.y))
            .map(|t| t.bounds().center().0);
        match lowest {
            Some(x) => steer_toward(g, x),
            None => catch::process_input(g, CatchInput::Stop),
        }
    });

    let results = game.results().expect("results after round");
    assert_eq!(results.reason, EndReason::TimeUp);
    assert!(results.won(), "score was {}", results.score);
}

#[test]
fn configured_round_length_is_honored() {
    let config = Config {
        round_seconds: 5,
        ..Config::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut game = start(GameKind::Coin, config.round_settings());

    let mut frames = 0;
    play_round(&mut game, &mut rng, |_| frames += 1);

    // 5000ms of 16ms steps, the timer fires on the step that reaches it
    assert_eq!(frames as u64, 5_000_u64.div_ceil(PHYSICS_TICK_MS));
    assert!(game.drain_cues().contains(&SoundCue::TimeUp));
}

#[test]
fn forfeit_round_reports_abandon() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut game = start(GameKind::Fruit, RoundSettings::default());
    game.tick(500, &mut rng);

    catch::process_input(catch_game(&mut game), CatchInput::Forfeit);
    assert_eq!(game.phase(), ScenePhase::Running);
    catch::process_input(catch_game(&mut game), CatchInput::Forfeit);
    assert_eq!(game.phase(), ScenePhase::Over);

    let results = game.results().expect("results after forfeit");
    assert_eq!(results.reason, EndReason::Forfeit);
    assert_eq!(results.reason_text(), "Round abandoned.");
}

#[test]
fn catches_raise_catch_cues() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let mut game = start(GameKind::Fruit, RoundSettings::default());
    assert_eq!(game.drain_cues(), vec![SoundCue::BackgroundMusic]);

    play_round(&mut game, &mut rng, |g| {
        let apple = g.targets[0].bounds();
        steer_toward(g, apple.center().0);
    });

    let catches = game
        .drain_cues()
        .into_iter()
        .filter(|c| *c == SoundCue::Catch)
        .count();
    assert_eq!(catches as u32, game.score());
}
