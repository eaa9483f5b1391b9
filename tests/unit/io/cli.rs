//! Tests for argument parsing, interactive sessions and autoplay

#[cfg(test)]
mod tests {
    use clap::Parser;
    use mergegrid::io::cli::{Cli, GameRunner, SessionOutcome};
    use mergegrid::io::command::{Command, parse_commands};
    use mergegrid::io::display::render_rows;
    use mergegrid::Tile;

    fn runner(args: &[&str]) -> GameRunner {
        let cli = Cli::try_parse_from(std::iter::once("mergegrid").chain(args.iter().copied()))
            .expect("Failed to parse arguments");
        GameRunner::new(cli)
    }

    fn play(runner: &GameRunner, input: &str) -> (SessionOutcome, String) {
        let mut output: Vec<u8> = Vec::new();
        let outcome = runner
            .play(input.as_bytes(), &mut output)
            .expect("Session failed");
        (outcome, String::from_utf8(output).expect("Output is not UTF-8"))
    }

    // Tests flags and defaults are parsed into the CLI struct
    // Verified by swapping the size and seed short flags
    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["mergegrid", "-n", "5", "--seed", "9", "-a", "3", "-q"])
            .expect("Failed to parse arguments");
        assert_eq!(cli.size, 5);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.autoplay, Some(3));
        assert!(!cli.should_show_progress());

        let defaults = Cli::try_parse_from(["mergegrid"]).expect("Failed to parse arguments");
        assert_eq!(defaults.size, 4);
        assert_eq!(defaults.seed, None);
        assert!(defaults.should_show_progress());

        assert!(Cli::try_parse_from(["mergegrid", "--size", "four"]).is_err());
    }

    // Tests seeded runners build identical engines per game and distinct ones across games
    // Verified by ignoring the game number when seeding
    #[test]
    fn test_new_engine_is_seeded_per_game() {
        let runner = runner(&["--seed", "11", "--size", "6"]);

        let first = runner.new_engine(0).expect("Failed to create engine");
        let again = runner.new_engine(0).expect("Failed to create engine");
        assert_eq!(first.rows(), again.rows());
        assert_eq!(first.size(), 6);

        let differs = (1..20).any(|game| {
            runner
                .new_engine(game)
                .is_ok_and(|engine| engine.rows() != first.rows())
        });
        assert!(differs);
    }

    // Tests an invalid size surfaces as an error before any play
    // Verified by clamping the size to one
    #[test]
    fn test_invalid_size_fails_session() {
        let runner = runner(&["--size", "0"]);
        let mut output: Vec<u8> = Vec::new();
        assert!(runner.play("h".as_bytes(), &mut output).is_err());
        assert!(output.is_empty());
    }

    // Tests the quit key ends the session after the opening board
    // Verified by processing keys after quit
    #[test]
    fn test_quit_ends_session() {
        let runner = runner(&["--seed", "5"]);
        let opening = runner.new_engine(0).expect("Failed to create engine");

        let (outcome, output) = play(&runner, "q\nhjkl\n");
        assert_eq!(outcome, SessionOutcome::Quit);
        assert_eq!(output, format!("{}\n", render_rows(&opening.rows())));
    }

    // Tests the session prints a board after every changing move and spawns each time
    // Verified by skipping the spawn after a move
    #[test]
    fn test_session_replays_engine_moves() {
        let runner = runner(&["--seed", "21"]);
        let input = "hjkl\nlkjh\nhhjj\n";

        let mut engine = runner.new_engine(0).expect("Failed to create engine");
        let mut boards = vec![render_rows(&engine.rows())];
        let mut stuck = !engine.can_move();
        for command in input.lines().flat_map(parse_commands) {
            if stuck {
                break;
            }
            let Command::Move(direction) = command else {
                break;
            };
            if engine.shift(direction).changed {
                engine.generate_cell().expect("Changed grid has space");
                boards.push(render_rows(&engine.rows()));
                if !engine.can_move() {
                    stuck = true;
                    break;
                }
            }
        }

        let (outcome, output) = play(&runner, input);
        let expected_outcome = if stuck {
            SessionOutcome::Stuck
        } else {
            SessionOutcome::InputClosed
        };
        assert_eq!(outcome, expected_outcome);
        for board in &boards {
            assert!(output.contains(board.as_str()));
        }
    }

    // Tests a single-cell grid can never change and ends stuck straight away
    // Verified by treating an empty grid as movable
    #[test]
    fn test_single_cell_session() {
        for seed in 0..10 {
            let runner = runner(&["--size", "1", "--seed", &seed.to_string()]);
            let opening = runner.new_engine(0).expect("Failed to create engine");

            let (outcome, output) = play(&runner, "hjkl");
            assert_eq!(outcome, SessionOutcome::Stuck);
            assert_eq!(
                output,
                format!("{}\nNo moves left\n", render_rows(&opening.rows()))
            );
        }
    }

    // Tests autoplay plays every game to a terminal grid and is reproducible
    // Verified by counting abandoned moves into the total
    #[test]
    fn test_autoplay_summary() {
        let runner = runner(&["--size", "3", "--seed", "8", "--quiet"]);

        let summary = runner.autoplay(6).expect("Autoplay failed");
        assert_eq!(summary.games, 6);
        assert_eq!(summary.max_tiles.values().sum::<usize>(), 6);
        assert!(summary.total_moves > 0);
        assert_eq!(summary.games_reaching(Tile::MAX), 0);

        let again = runner.autoplay(6).expect("Autoplay failed");
        assert_eq!(summary, again);

        let report = summary.to_string();
        assert!(report.starts_with("Played 6 games"));
    }

    // Tests the move limit caps each automated game
    // Verified by ignoring the limit
    #[test]
    fn test_autoplay_respects_move_limit() {
        let runner = runner(&["--seed", "3", "--max-moves", "4", "--quiet"]);

        let summary = runner.autoplay(3).expect("Autoplay failed");
        assert_eq!(summary.games, 3);
        assert!(summary.total_moves <= 12);
    }
}
