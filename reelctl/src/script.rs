//! Line-oriented event scripts for driving the host without a terminal.
//!
//! One token per line:
//!   left|right|advance|retreat|down:<x>|move:<x>|up|leave|
//!   touch:<x>|touchmove:<x>|touchend|touchcancel|resize:<w>|quit
//! Lines beginning with # and blank lines are skipped.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};
use reel_core::{Direction, EventTarget, GestureEvent, Side};

use crate::host::HostEvent;

/// Read and parse a script file.
pub fn load(path: &Path) -> Result<Vec<HostEvent>> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read event script {}", path.display())
    })?;
    parse(&contents)
        .with_context(|| format!("invalid event script {}", path.display()))
}

/// Parse script text into host events.
pub fn parse(contents: &str) -> Result<Vec<HostEvent>> {
    let mut events = Vec::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let event = parse_token(line).ok_or_else(|| {
            anyhow!("unrecognized script token at line {}: {}", idx + 1, line)
        })?;
        events.push(event);
    }
    Ok(events)
}

fn parse_token(token: &str) -> Option<HostEvent> {
    let event = match token {
        "left" => HostEvent::Activate(Side::Left),
        "right" => HostEvent::Activate(Side::Right),
        "advance" => HostEvent::Step(Direction::Advance),
        "retreat" => HostEvent::Step(Direction::Retreat),
        "up" => HostEvent::Gesture(GestureEvent::PointerUp),
        "leave" => HostEvent::Gesture(GestureEvent::PointerLeave),
        "touchend" => HostEvent::Gesture(GestureEvent::TouchEnd),
        "touchcancel" => HostEvent::Gesture(GestureEvent::TouchCancel),
        "q" | "quit" => HostEvent::Quit,
        _ => {
            let (name, value) = token.split_once(':')?;
            let value: f32 = value.trim().parse().ok()?;
            if !value.is_finite() {
                return None;
            }
            match name.trim() {
                "down" => HostEvent::Gesture(GestureEvent::down(value)),
                "move" => HostEvent::Gesture(GestureEvent::moved(value)),
                "touch" => HostEvent::Gesture(GestureEvent::TouchStart {
                    touches: vec![value],
                    target: EventTarget::Track,
                }),
                "touchmove" => HostEvent::Gesture(GestureEvent::TouchMove {
                    touches: vec![value],
                }),
                "resize" if value >= 0.0 => HostEvent::Resize(value),
                _ => return None,
            }
        }
    };
    Some(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_token_kind() {
        let events = parse(
            "# warm up\nright\nadvance\n\ndown:40\nmove: 30.5\nup\nleave\n\
             touch:10\ntouchmove:4\ntouchend\ntouchcancel\nresize:80\nquit\n",
        )
        .unwrap();
        assert_eq!(events.len(), 13);
        assert_eq!(events[0], HostEvent::Activate(Side::Right));
        assert_eq!(events[1], HostEvent::Step(Direction::Advance));
        assert_eq!(events[2], HostEvent::Gesture(GestureEvent::down(40.0)));
        assert_eq!(events[3], HostEvent::Gesture(GestureEvent::moved(30.5)));
        assert_eq!(events[11], HostEvent::Resize(80.0));
        assert_eq!(events[12], HostEvent::Quit);
    }

    #[test]
    fn reports_line_of_bad_token() {
        let err = parse("left\n\nsideways\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized script token at line 3: sideways"
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(parse("down:abc").is_err());
        assert!(parse("move:NaN").is_err());
        assert!(parse("resize:-5").is_err());
    }
}
