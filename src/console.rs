//! Line-oriented text prompt: one column number per line, board printed after
//! every accepted move, result printed when the game ends.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::game::GameEngine;

pub const WRONG_INPUT: &str = "Wrong Input";

/// Play one game on `engine`, reading moves from `input`.
///
/// Stops when the game finishes or `input` runs out. The result line is only
/// printed for a finished game.
pub fn run_console<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", engine.render_board())?;

    let mut line = String::new();
    while !engine.is_finished() {
        let player = engine.current_turn();
        write!(
            output,
            "{}[{}] - choose column (1-{}): ",
            player.label(),
            player.colour(),
            engine.config().columns
        )?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            info!("input closed before the game finished");
            return Ok(());
        }

        let column = match line.trim().parse::<i64>() {
            Ok(column) => column,
            Err(_) => {
                debug!("rejected input {:?}", line.trim());
                writeln!(output, "{WRONG_INPUT}")?;
                continue;
            }
        };

        match engine.apply_move(column) {
            Ok(_) => writeln!(output, "{}", engine.render_board())?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    writeln!(output, "{}", engine.outcome())?;
    Ok(())
}
