//! Text console over a [`Session`].
//!
//! Navigation verbs are parsed into [`NavCommand`]s and applied; the rest
//! (`WHERE`, `VISIBLE`, `TARGET`, `HELP`, `QUIT`) only read the session.

use universe_catalog::body::format_scientific;

use crate::command::NavCommand;
use crate::error::{NavError, Result};
use crate::session::Session;

pub const COMMANDS: &[&str] = &[
    "MOVE", "LOOK", "ZOOM", "SPEED", "GOTO", "WHERE", "VISIBLE", "TARGET", "HELP", "QUIT",
];

const DEFAULT_VISIBLE_ROWS: usize = 20;

pub enum CommandOutput {
    Text(String),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    None,
}

pub fn dispatch(session: &mut Session, input: &str) -> Result<CommandOutput> {
    if let Some(command) = NavCommand::parse(input)? {
        session.apply(&command)?;
        return Ok(match command {
            NavCommand::Goto(_) => where_am_i(session),
            _ => CommandOutput::None,
        });
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some(verb) = parts.first() else {
        return Ok(CommandOutput::None);
    };
    let args = &parts[1..];
    match verb.to_uppercase().as_str() {
        "WHERE" => Ok(where_am_i(session)),
        "VISIBLE" => visible(session, args),
        "TARGET" => Ok(target(session)),
        "HELP" => Ok(CommandOutput::Text(help(args.first().copied()))),
        "QUIT" => Ok(CommandOutput::Text("Use Ctrl-D to exit".to_string())),
        _ => Err(NavError::UnknownCommand(parts[0].to_string())),
    }
}

fn where_am_i(session: &Session) -> CommandOutput {
    let camera = &session.camera;
    let mut text = format!(
        "Position: {:.4} ly\nYaw: {:.1}°  Pitch: {:.1}°  Zoom: {:.1}°  Speed: {} ly/s",
        camera.position(),
        camera.yaw(),
        camera.pitch(),
        camera.zoom(),
        camera.speed()
    );
    if let Some(id) = session.last_goto {
        text.push_str(&format!("\nLast destination: {}", session.name_of(id)));
    }
    CommandOutput::Text(text)
}

fn visible(session: &Session, args: &[&str]) -> Result<CommandOutput> {
    let limit = match args.first() {
        Some(n) => n
            .parse::<usize>()
            .map_err(|_| NavError::Parse(format!("invalid row count: {}", n)))?,
        None => DEFAULT_VISIBLE_ROWS,
    };

    // Paint order is farthest first; show the nearest end.
    let stars = session.visible();
    let skip = stars.len().saturating_sub(limit);
    let rows = stars[skip..]
        .iter()
        .map(|s| {
            vec![
                session.name_of(s.id),
                format!("{:.4}", s.distance_ly),
                format!("{:.5}", s.hints.render_scale),
                s.color.to_string(),
            ]
        })
        .collect();

    Ok(CommandOutput::Table {
        headers: ["Name", "Dist (ly)", "Scale", "Color"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows,
    })
}

fn target(session: &Session) -> CommandOutput {
    let Some(selection) = session.target() else {
        return CommandOutput::Text("No target in view".to_string());
    };
    let Some((body, info)) = session.catalog.star(selection.id) else {
        return CommandOutput::None;
    };
    CommandOutput::Text(format!(
        "{}  class {}  {:.4} ly away, {:.2}° off center\nMass: {} kg  Radius: {:.0} km",
        body.name,
        info.spectral_class,
        selection.distance_ly,
        selection.angle_deg,
        format_scientific(body.mass_kg),
        body.radius_km
    ))
}

fn help(command: Option<&str>) -> String {
    let Some(cmd) = command else {
        return format!("Commands: {}\nHELP <command> for details", COMMANDS.join(" "));
    };
    match cmd.to_uppercase().as_str() {
        "MOVE" => "MOVE <F|B|L|R|U|D> [seconds]\n  Move along the camera basis at the current speed".into(),
        "LOOK" => "LOOK <dx> <dy>\n  Turn by dx, dy times the sensitivity; pitch stops at ±89°".into(),
        "ZOOM" => "ZOOM <delta>\n  Narrow (positive) or widen (negative) the field of view, 1°..120°".into(),
        "SPEED" => "SPEED +|-\n  Multiply or divide the speed by 1.5 (0.01..100 ly/s)".into(),
        "GOTO" => "GOTO <name | hipN | N>\n  Jump next to the first matching star".into(),
        "WHERE" => "WHERE\n  Show camera state".into(),
        "VISIBLE" => "VISIBLE [n]\n  List the nearest n visible stars (default 20)".into(),
        "TARGET" => "TARGET\n  Show the star closest to the view center".into(),
        "HELP" => "HELP [command]\n  Show help for a command".into(),
        "QUIT" => "QUIT\n  Exit the program".into(),
        _ => format!("Unknown command: {}", cmd),
    }
}
