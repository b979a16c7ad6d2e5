//! Precinct - entry point
//!
//! Wires the scripted demo session to the board component and runs the
//! terminal loop: draw, read one key, apply whatever command the board
//! emitted, repeat.

use clap::Parser;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};

use precinct::core::config::BoardConfig;
use precinct::core::error::{PrecinctError, Result};
use precinct::game::session::GameSession;
use precinct::ui::input::{handle_key, InputAction};
use precinct::ui::state::Board;
use precinct::ui::{display, terminal};

#[derive(Parser, Debug)]
#[command(name = "precinct", about = "Municipal police allocation simulation")]
struct Args {
    /// RNG seed for the scripted demo session
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Number of rounds in a full game
    #[arg(long, default_value_t = 10)]
    rounds: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "precinct=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = BoardConfig {
        total_rounds: args.rounds,
        ..BoardConfig::default()
    };
    config.validate().map_err(PrecinctError::InvalidConfig)?;

    tracing::info!(seed = args.seed, rounds = args.rounds, "precinct starting");

    let mut session = GameSession::new(config.clone(), args.seed);
    let mut board = Board::new(config, &session.board_input());

    let mut term = terminal::init()?;
    let result = run(&mut term, &mut session, &mut board);
    terminal::restore()?;
    result
}

fn run(
    term: &mut terminal::BoardTerminal,
    session: &mut GameSession,
    board: &mut Board,
) -> Result<()> {
    loop {
        {
            let input = session.board_input();
            board.sync(&input);
            term.draw(|frame| display::draw_board(frame, board, &input))?;
        }

        let action = match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                let input = session.board_input();
                handle_key(board, &input, key)
            }
            _ => InputAction::None,
        };

        match action {
            InputAction::Quit => return Ok(()),
            InputAction::Command(command) => session.apply(command),
            InputAction::None => {}
        }
    }
}
