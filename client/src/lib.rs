pub mod cli;
pub mod frame;
pub mod input;
pub mod run;
pub mod terminal;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    cli::{Cli, Command},
    frame::{TextFrame, terminal_camera},
    terminal::{Screen, TerminalEvents},
};
use common::player::Player;

pub fn run_client(cli: &Cli) -> Result<()> {
    let maze = cli.build_maze().context("failed to generate maze")?;
    let mut player = Player::spawn(&maze).context("failed to place player")?;
    info!(
        x = player.pose.position.x,
        y = player.pose.position.y,
        "player spawned"
    );

    match cli.command() {
        Command::Map => println!("{}", maze),
        Command::Frame {
            width,
            height,
            heading,
        } => {
            if let Some(degrees) = heading {
                player.pose.heading = degrees.to_radians();
            }
            let camera = terminal_camera(cli.fov, width, height);
            let frame = TextFrame::render(&camera, &player.pose, &maze);
            println!("{}", frame.to_plain_string());
        }
        Command::Play => {
            let mut screen = Screen::new().context("failed to initialize terminal")?;
            run::run_game(
                &mut screen,
                &mut TerminalEvents,
                &maze,
                &mut player,
                cli.fov,
            )?;
        }
    }

    Ok(())
}
