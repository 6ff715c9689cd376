//! Discrete navigation commands and the queue that carries them.
//!
//! Input collaborators push [`NavCommand`]s; the owner of the camera drains
//! the queue once per frame and applies them in order.

use std::collections::VecDeque;
use std::fmt;

use crate::camera::Movement;
use crate::error::{NavError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedChange {
    Increase,
    Decrease,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavCommand {
    Move { direction: Movement, seconds: f64 },
    Look { dx: f64, dy: f64 },
    Zoom(f64),
    Speed(SpeedChange),
    /// Free-text star search followed by a teleport.
    Goto(String),
}

impl fmt::Display for NavCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavCommand::Move { direction, seconds } => write!(f, "move {} {}s", direction, seconds),
            NavCommand::Look { dx, dy } => write!(f, "look {} {}", dx, dy),
            NavCommand::Zoom(d) => write!(f, "zoom {}", d),
            NavCommand::Speed(SpeedChange::Increase) => write!(f, "speed +"),
            NavCommand::Speed(SpeedChange::Decrease) => write!(f, "speed -"),
            NavCommand::Goto(q) => write!(f, "goto {}", q),
        }
    }
}

fn number(name: &str, s: Option<&&str>) -> Result<f64> {
    let s = s.ok_or_else(|| NavError::Parse(format!("{} requires a value", name)))?;
    s.parse::<f64>()
        .map_err(|_| NavError::Parse(format!("invalid {}: {}", name, s)))
}

impl NavCommand {
    /// Parses the navigation subset of console input: `MOVE`, `LOOK`,
    /// `ZOOM`, `SPEED` and `GOTO`. Returns `Ok(None)` for any other verb.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(verb) = parts.first() else {
            return Ok(None);
        };
        let args = &parts[1..];

        let command = match verb.to_uppercase().as_str() {
            "MOVE" => {
                let direction = args
                    .first()
                    .ok_or_else(|| NavError::Parse("MOVE requires a direction".into()))?
                    .parse()?;
                let seconds = if args.len() > 1 {
                    number("seconds", args.get(1))?
                } else {
                    1.0
                };
                NavCommand::Move { direction, seconds }
            }
            "LOOK" => NavCommand::Look {
                dx: number("dx", args.first())?,
                dy: number("dy", args.get(1))?,
            },
            "ZOOM" => NavCommand::Zoom(number("delta", args.first())?),
            "SPEED" => match args.first().copied() {
                Some("+") => NavCommand::Speed(SpeedChange::Increase),
                Some("-") => NavCommand::Speed(SpeedChange::Decrease),
                _ => return Err(NavError::Parse("SPEED requires + or -".into())),
            },
            "GOTO" => {
                if args.is_empty() {
                    return Err(NavError::Parse("GOTO requires a star name".into()));
                }
                NavCommand::Goto(args.join(" "))
            }
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

/// FIFO of pending commands.
#[derive(Debug, Clone, Default)]
pub struct CommandQueue {
    pending: VecDeque<NavCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: NavCommand) {
        self.pending.push_back(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and yields every pending command, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = NavCommand> + '_ {
        self.pending.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(
            NavCommand::parse("move f 2.5").unwrap(),
            Some(NavCommand::Move {
                direction: Movement::Forward,
                seconds: 2.5
            })
        );
        assert_eq!(
            NavCommand::parse("MOVE up").unwrap(),
            Some(NavCommand::Move {
                direction: Movement::Up,
                seconds: 1.0
            })
        );
        assert_eq!(
            NavCommand::parse("look -10 4").unwrap(),
            Some(NavCommand::Look { dx: -10.0, dy: 4.0 })
        );
        assert_eq!(NavCommand::parse("zoom 3").unwrap(), Some(NavCommand::Zoom(3.0)));
        assert_eq!(
            NavCommand::parse("speed -").unwrap(),
            Some(NavCommand::Speed(SpeedChange::Decrease))
        );
        assert_eq!(
            NavCommand::parse("goto  Barnard's   Star").unwrap(),
            Some(NavCommand::Goto("Barnard's Star".into()))
        );
    }

    #[test]
    fn test_parse_other_verbs() {
        assert_eq!(NavCommand::parse("").unwrap(), None);
        assert_eq!(NavCommand::parse("WHERE").unwrap(), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(NavCommand::parse("MOVE").is_err());
        assert!(NavCommand::parse("MOVE sideways").is_err());
        assert!(NavCommand::parse("LOOK 1").is_err());
        assert!(NavCommand::parse("ZOOM wide").is_err());
        assert!(NavCommand::parse("SPEED fast").is_err());
        assert!(NavCommand::parse("GOTO").is_err());
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = CommandQueue::new();
        queue.push(NavCommand::Zoom(1.0));
        queue.push(NavCommand::Speed(SpeedChange::Increase));
        assert_eq!(queue.len(), 2);
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(
            drained,
            vec![NavCommand::Zoom(1.0), NavCommand::Speed(SpeedChange::Increase)]
        );
        assert!(queue.is_empty());
    }
}
