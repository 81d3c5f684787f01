use game_core::*;
use glam::{IVec2, Vec2};
use std::time::Duration;

fn quiet_config() -> Config {
    Config {
        tick_sleep: Duration::ZERO,
        ..Config::new()
    }
}

fn place_ball(game: &mut Game, pos: IVec2, vel: Vec2) {
    for (_e, (body, velocity, _)) in game
        .world_mut()
        .query_mut::<(&mut Body, &mut Velocity, &Ball)>()
    {
        body.pos = pos;
        velocity.vel = vel;
    }
}

fn ball_velocity(game: &Game) -> Vec2 {
    game.world()
        .query::<(&Velocity, &Ball)>()
        .iter()
        .next()
        .map(|(_e, (vel, _))| vel.vel)
        .expect("game should have a ball")
}

#[test]
fn test_zero_dt_tick_only_moves_ball() {
    let mut game = Game::new(quiet_config(), 42).unwrap();
    place_ball(&mut game, IVec2::new(390, 390), Vec2::new(7.0, 0.0));

    game.tick(InputSnapshot::default(), 0.0);

    assert_eq!(game.frame().ball.pos, IVec2::new(397, 390));
    assert_eq!(ball_velocity(&game), Vec2::new(7.0, 0.0));
}

#[test]
fn test_pass_at_left_edge_scores_once() {
    let mut game = Game::new(quiet_config(), 42).unwrap();
    place_ball(&mut game, IVec2::new(5, 200), Vec2::new(-7.0, 0.0));

    game.tick(InputSnapshot::default(), 0.016);

    let frame = game.frame();
    assert_eq!(frame.ball.pos, IVec2::new(390, 390), "ball is served from center");
    assert_eq!(ball_velocity(&game).x, 7.0, "serve heads the other way");
    assert_eq!(frame.score, [0, 1], "right player scores exactly once");
    assert_eq!(game.events().ball_passed, None, "pass event was consumed");

    game.tick(InputSnapshot::default(), 0.016);
    assert_eq!(game.frame().score, [0, 1], "no second point on the next tick");
}

#[test]
fn test_pass_at_right_edge_scores_for_left() {
    let mut game = Game::new(quiet_config(), 42).unwrap();
    place_ball(&mut game, IVec2::new(775, 100), Vec2::new(7.0, 1.0));

    game.tick(InputSnapshot::default(), 0.016);

    assert_eq!(game.frame().score, [1, 0]);
    assert_eq!(ball_velocity(&game).x, -7.0);
}

#[test]
fn test_match_over_at_win_condition() {
    let mut game = Game::new(quiet_config(), 42).unwrap();

    for point in 1..=5 {
        assert!(!game.is_match_over());
        place_ball(&mut game, IVec2::new(775, 100), Vec2::new(7.0, 0.0));
        game.tick(InputSnapshot::default(), 0.016);
        assert_eq!(game.match_state().score, [point, 0]);
    }

    assert!(game.is_match_over());
    assert_eq!(game.winner(), Some(Side::Left));
    assert_eq!(game.frame().winner, Some(Side::Left));

    // The match stays decided while play continues
    game.tick(InputSnapshot::default(), 0.016);
    assert_eq!(game.winner(), Some(Side::Left));
}

#[test]
fn test_resumed_match_is_decided_by_next_point() {
    let mut game = Game::new(quiet_config(), 42).unwrap();
    game.match_state_mut().score = [4, 0];
    assert!(!game.is_match_over());

    place_ball(&mut game, IVec2::new(775, 100), Vec2::new(7.0, 0.0));
    game.tick(InputSnapshot::default(), 0.016);

    assert_eq!(game.frame().score, [5, 0]);
    assert_eq!(game.winner(), Some(Side::Left));
}

#[test]
fn test_human_paddle_stops_exactly_on_floor() {
    let mut game = Game::new(quiet_config(), 42).unwrap();

    for _ in 0..200 {
        game.tick(InputSnapshot::steer(Direction::Down), 0.016);
    }

    let left = game.frame().left;
    assert_eq!(left.pos.y, 700, "paddle bottom rests on the arena floor");
    assert_eq!(left.pos.x, 20, "paddles never move sideways");
}

#[test]
fn test_paddle_return_ball_flips_vx() {
    let mut game = Game::new(quiet_config(), 42).unwrap();
    // One tick away from the left paddle's face at x = 40, lands centered on it
    place_ball(&mut game, IVec2::new(45, 388), Vec2::new(-7.0, 2.0));

    game.tick(InputSnapshot::default(), 0.0);

    assert_eq!(ball_velocity(&game), Vec2::new(7.0, -2.0));
    assert_eq!(game.events().paddle_hit, Some(Side::Left));
    assert_eq!(game.match_state().rally, 1);
}

#[test]
fn test_invariants_hold_over_long_session() {
    let mut game = Game::new(quiet_config(), 7).unwrap();
    let arena = game.config().arena_size();
    let (vmin, vmax) = (game.config().velocity_min, game.config().velocity_max);
    let mut last_score = [0u32; 2];

    for tick in 0..20_000u32 {
        let dir = match (tick / 90) % 3 {
            0 => Direction::Up,
            1 => Direction::Idle,
            _ => Direction::Down,
        };
        game.tick(InputSnapshot::steer(dir), 0.016);

        let frame = game.frame();
        for body in [frame.left, frame.right, frame.ball] {
            assert!(body.pos.cmpge(IVec2::ZERO).all(), "tick {tick}: {body:?} escaped low");
            assert!(
                (body.pos + body.size).cmple(arena).all(),
                "tick {tick}: {body:?} escaped high"
            );
        }

        for (_e, (vel, _)) in game.world().query::<(&Velocity, &PlayerData)>().iter() {
            assert!((vmin..=vmax).contains(&vel.vel.y), "tick {tick}: vy {}", vel.vel.y);
        }

        assert!(frame.score[0] >= last_score[0] && frame.score[1] >= last_score[1]);
        let gained: u32 = (0..2).map(|i| frame.score[i] - last_score[i]).sum();
        assert!(gained <= 1, "tick {tick}: at most one point per tick");
        last_score = frame.score;
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut game = Game::new(quiet_config(), seed).unwrap();
        let mut frames = Vec::new();
        for tick in 0..2_000u32 {
            let dir = if tick % 200 < 100 { Direction::Up } else { Direction::Down };
            game.tick(InputSnapshot::steer(dir), 0.016);
            frames.push(game.frame());
        }
        frames
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn test_run_renders_every_tick_until_quit() {
    let mut game = Game::new(quiet_config(), 3).unwrap();
    let mut remaining = 50;
    let mut input = || {
        if remaining == 0 {
            return InputSnapshot::quit();
        }
        remaining -= 1;
        InputSnapshot::steer(Direction::Up)
    };
    let mut ticks = Vec::new();

    game.run(&mut FixedClock(0.016), &mut input, |frame| ticks.push(frame.tick));

    assert_eq!(ticks, (1..=50).collect::<Vec<u64>>());
    assert_eq!(game.loop_state(), LoopState::Stopped);
    assert!(game.frame().left.pos.y < 350, "holding up moved the paddle up");
}
