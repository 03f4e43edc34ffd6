//! Operator control lines read from stdin.

use factoryvis_core::commands::LineCommand;

use crate::state::LoopCommand;

/// Parse one control line.
///
/// Accepted: `pause`, `resume`, `toggle`, `reset`, `speed <x>`, `quit`.
/// Blank lines yield `Ok(None)`.
pub fn parse_control(line: &str) -> Result<Option<LoopCommand>, String> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "pause" => LoopCommand::Line(LineCommand::Pause),
        "resume" => LoopCommand::Line(LineCommand::Resume),
        "toggle" => LoopCommand::Line(LineCommand::TogglePause),
        "reset" => LoopCommand::Line(LineCommand::Reset),
        "quit" | "exit" => LoopCommand::Shutdown,
        "speed" => {
            let value = words.next().ok_or("speed needs a value")?;
            let multiplier: f64 = value
                .parse()
                .map_err(|_| format!("not a number: {value}"))?;
            LoopCommand::Line(LineCommand::SetSpeed { multiplier })
        }
        other => return Err(format!("unknown command: {other}")),
    };

    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument: {extra}"));
    }
    Ok(Some(command))
}
