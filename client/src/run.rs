use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::{
    frame::{TextFrame, terminal_camera},
    input::{Action, action_from_event},
    terminal::{EventSource, Screen},
};
use common::{maze::Maze, player::Player};

pub const FRAME_TIME: Duration = Duration::from_millis(16); // ~60 FPS.

/// Redraws only after something changed, so an idle view costs nothing but polling.
pub fn run_game<W: Write>(
    screen: &mut Screen<W>,
    events: &mut dyn EventSource,
    maze: &Maze,
    player: &mut Player,
    fov_degrees: f32,
) -> Result<()> {
    let mut dirty = true;

    loop {
        if dirty {
            draw(screen, maze, player, fov_degrees).context("failed to draw frame")?;
            dirty = false;
        }

        let Some(event) = events
            .next_event(FRAME_TIME)
            .context("failed to read terminal event")?
        else {
            continue;
        };

        match action_from_event(&event) {
            Some(Action::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            Some(Action::Move(input)) => {
                if player.update(maze, &input) {
                    debug!(
                        x = player.pose.position.x,
                        y = player.pose.position.y,
                        heading = player.pose.heading,
                        "player moved"
                    );
                    dirty = true;
                }
            }
            Some(Action::Resize(cols, rows)) => {
                screen.resize(cols, rows)?;
                dirty = true;
            }
            None => {}
        }
    }
}

fn draw<W: Write>(
    screen: &mut Screen<W>,
    maze: &Maze,
    player: &Player,
    fov_degrees: f32,
) -> std::io::Result<()> {
    let (cols, _) = screen.size();
    let camera = terminal_camera(fov_degrees, cols, screen.view_rows());
    let frame = TextFrame::render(&camera, &player.pose, maze);
    screen.draw(&frame)?;
    screen.draw_status(&status_line(player))
}

pub fn status_line(player: &Player) -> String {
    let position = player.pose.position;
    format!(
        "x {:.1}  y {:.1}  facing {:.0}°   WASD/↑↓ move  Q/E/←→ turn  Esc quit",
        position.x,
        position.y,
        player.pose.heading.to_degrees()
    )
}
