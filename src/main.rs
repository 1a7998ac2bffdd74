use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use std::io::{stdin, stdout, Write};

use cell_swarm::{
    config::{DEFAULT_COLUMNS, DEFAULT_INAROW, DEFAULT_ROWS},
    *,
};

#[derive(Parser, Debug)]
#[command(name = "connectx", about = "A heuristic agent for ConnectX")]
struct Args {
    /// Board height in tiles
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Board width in tiles
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Aligned tiles needed to win
    #[arg(long, default_value_t = DEFAULT_INAROW)]
    inarow: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game in the terminal, any side may be controlled by the agent
    Play,

    /// Print the agent's column for a harness observation
    Select {
        /// Observation JSON, e.g. '{"board": [0, 0, ...], "mark": 1}'
        #[arg(long)]
        observation: String,

        /// Configuration JSON; overrides --rows/--columns/--inarow
        #[arg(long)]
        configuration: Option<String>,
    },

    /// Play a series of games against a sparring opponent
    Arena {
        #[arg(long, default_value_t = 100)]
        episodes: usize,

        #[arg(long, value_enum, default_value_t = Opponent::Negamax)]
        opponent: Opponent,

        /// Base seed, episodes use seed + 2 * episode
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Plies searched by the negamax opponent
        #[arg(long, default_value_t = 4)]
        depth: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opponent {
    Swarm,
    Random,
    Negamax,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Configuration::new(args.rows, args.columns, args.inarow)?;

    match args.command {
        Command::Play => play(config),
        Command::Select {
            observation,
            configuration,
        } => {
            let observation: Observation = serde_json::from_str(&observation)?;
            let config = match configuration {
                Some(json) => serde_json::from_str::<Configuration>(&json)?,
                None => config,
            };
            config.validate()?;
            println!("{}", select_move(&observation, &config)?);
            Ok(())
        }
        Command::Arena {
            episodes,
            opponent,
            seed,
            depth,
        } => {
            let swarm = SwarmAgent::new(config)?;
            let challenger = |_seed: u64| -> Box<dyn Agent> { Box::new(swarm.clone()) };
            let sparring = |seed: u64| -> Box<dyn Agent> {
                match opponent {
                    Opponent::Swarm => Box::new(swarm.clone()),
                    Opponent::Random => Box::new(RandomAgent::new(seed)),
                    Opponent::Negamax => Box::new(NegamaxAgent::new(depth)),
                }
            };

            println!(
                "{} vs {} on a {}x{} board, {} in a row",
                challenger(seed).name(),
                sparring(seed).name(),
                config.rows,
                config.columns,
                config.inarow
            );
            let summary = Arena::new(config, episodes)
                .with_seed(seed)
                .with_progress()
                .run(&challenger, &sparring)?;
            println!("{}", summary);
            Ok(())
        }
    }
}

fn prompt_yes_no(question: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush()?;
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn play(config: Configuration) -> Result<()> {
    let mut board = Board::new(config)?;
    let mut agent = SwarmAgent::new(config)?;
    let stdin = stdin();

    println!("Welcome to ConnectX, {} in a row wins\n", config.inarow);

    let ai_players = (
        prompt_yes_no("Is player 1 AI controlled?")?,
        prompt_yes_no("Is player 2 AI controlled?")?,
    );

    let mut player = Player::One;
    loop {
        board.display()?;

        let ai_controlled = match player {
            Player::One => ai_players.0,
            Player::Two => ai_players.1,
        };
        let column = if ai_controlled {
            // slow down play if both players are AI
            if ai_players == (true, true) {
                std::thread::sleep(std::time::Duration::new(1, 0));
            }
            let column = agent.select_move(&board, player)?;
            println!("Player {} plays column {}", player.mark(), column + 1);
            column
        } else {
            print!("Move input > ");
            stdout().flush()?;
            let mut input_str = String::new();
            stdin.read_line(&mut input_str)?;

            match input_str.trim().parse::<usize>() {
                Ok(column) if column >= 1 => column - 1,
                _ => {
                    println!("Invalid number: {}", input_str.trim());
                    continue;
                }
            }
        };

        match board.play_checked(column, player) {
            Err(err) => {
                // try the move again
                println!("{}", err);
                continue;
            }
            Ok(GameState::Playing) => player = player.opponent(),
            Ok(GameState::Won(winner)) => {
                board.display()?;
                println!("Player {} wins!", winner.mark());
                return Ok(());
            }
            Ok(GameState::Draw) => {
                board.display()?;
                println!("Draw!");
                return Ok(());
            }
        }
    }
}
