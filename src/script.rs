//! Command scripts for driving a stepper without a GUI
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! value <number>              set_value
//! update <number> <bool>      update_value(number, finished)
//! min | max | step <number>   bound and step setters
//! wraps | continuous | autorepeat <bool>
//! text <words...>             label override
//! text-clear                  remove the label override
//! inc | dec                   one finished step
//! press                       begin a drag session
//! drag <offset>               move the thumb (normalized, -1..1)
//! tick                        host repeat timer fired
//! release                     end the drag session
//! show                        print the label text
//! ```

use crate::error::{Result, StepperError};
use crate::input::DragSession;
use crate::stepper::ValueController;
use tracing::debug;

/// One parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Direct assignment
    SetValue(f64),
    /// Interactive update
    Update {
        /// Raw value
        value: f64,
        /// Whether this update ends the streak
        finished: bool,
    },
    /// Set the lower bound
    Minimum(f64),
    /// Set the upper bound
    Maximum(f64),
    /// Set the step
    Step(f64),
    /// Toggle wrapping
    Wraps(bool),
    /// Toggle continuous notification
    Continuous(bool),
    /// Toggle autorepeat
    Autorepeat(bool),
    /// Set (`Some`) or clear (`None`) the label override
    ThumbText(Option<String>),
    /// One step up
    Increment,
    /// One step down
    Decrement,
    /// Touch-down on the thumb
    Press,
    /// Thumb moved
    Drag(f64),
    /// Repeat timer fired
    Tick,
    /// Touch released
    Release,
    /// Print the label
    Show,
}

/// Parse a whole script
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, line)? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse one line; `Ok(None)` for blank lines and comments
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let error = |message: String| StepperError::ScriptError {
        line: line_number,
        message,
    };

    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let number = |arg: Option<&&str>| -> Result<f64> {
        let arg = arg.ok_or_else(|| error(format!("'{keyword}' needs a number")))?;
        arg.parse::<f64>()
            .map_err(|_| error(format!("'{arg}' is not a number")))
    };
    let flag = |arg: Option<&&str>| -> Result<bool> {
        match arg.copied() {
            Some("true" | "on" | "yes") => Ok(true),
            Some("false" | "off" | "no") => Ok(false),
            Some(other) => Err(error(format!("'{other}' is not a boolean"))),
            None => Err(error(format!("'{keyword}' needs true or false"))),
        }
    };

    let expected_args = match keyword {
        "value" | "min" | "max" | "step" | "drag" | "wraps" | "continuous" | "autorepeat" => {
            Some(1)
        }
        "update" => Some(2),
        "inc" | "dec" | "press" | "tick" | "release" | "show" | "text-clear" => Some(0),
        _ => None,
    };
    if let Some(expected) = expected_args
        && args.len() > expected
    {
        return Err(error(format!(
            "'{keyword}' takes {expected} argument(s), got {}",
            args.len()
        )));
    }

    let command = match keyword {
        "value" => Command::SetValue(number(args.first())?),
        "update" => Command::Update {
            value: number(args.first())?,
            finished: flag(args.get(1))?,
        },
        "min" => Command::Minimum(number(args.first())?),
        "max" => Command::Maximum(number(args.first())?),
        "step" => Command::Step(number(args.first())?),
        "wraps" => Command::Wraps(flag(args.first())?),
        "continuous" => Command::Continuous(flag(args.first())?),
        "autorepeat" => Command::Autorepeat(flag(args.first())?),
        "text" => Command::ThumbText(Some(rest.to_string())),
        "text-clear" => Command::ThumbText(None),
        "inc" => Command::Increment,
        "dec" => Command::Decrement,
        "press" => Command::Press,
        "drag" => Command::Drag(number(args.first())?),
        "tick" => Command::Tick,
        "release" => Command::Release,
        "show" => Command::Show,
        other => return Err(error(format!("unknown command '{other}'"))),
    };

    Ok(Some(command))
}

/// Applies commands to a controller, tracking the drag in progress
#[derive(Debug, Default)]
pub struct ScriptRunner {
    controller: ValueController,
    drag: Option<DragSession>,
}

impl ScriptRunner {
    /// Wrap an existing controller
    pub fn new(controller: ValueController) -> Self {
        Self {
            controller,
            drag: None,
        }
    }

    /// Controller being driven
    pub fn controller(&self) -> &ValueController {
        &self.controller
    }

    /// Mutable access, e.g. to install the change callback
    pub fn controller_mut(&mut self) -> &mut ValueController {
        &mut self.controller
    }

    /// Whether a drag session is open
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Run one command
    ///
    /// Returns the label text for `show`, `None` otherwise. Drag commands without
    /// an open session (and `press` during one) are errors.
    pub fn apply(&mut self, line_number: usize, command: &Command) -> Result<Option<String>> {
        debug!("Applying {:?}", command);
        let controller = &mut self.controller;

        match command {
            Command::SetValue(value) => controller.set_value(*value),
            Command::Update { value, finished } => controller.update_value(*value, *finished),
            Command::Minimum(value) => controller.set_minimum_value(*value),
            Command::Maximum(value) => controller.set_maximum_value(*value),
            Command::Step(value) => controller.set_step_value(*value),
            Command::Wraps(flag) => controller.set_wraps(*flag),
            Command::Continuous(flag) => controller.set_continuous(*flag),
            Command::Autorepeat(flag) => controller.set_autorepeat(*flag),
            Command::ThumbText(text) => controller.set_thumb_text(text.clone()),
            Command::Increment => controller.increment(true),
            Command::Decrement => controller.decrement(true),
            Command::Press => {
                if self.drag.is_some() {
                    return Err(session_error(line_number, "a drag is already in progress"));
                }
                self.drag = Some(DragSession::begin(controller));
            }
            Command::Drag(offset) => {
                let drag = self
                    .drag
                    .as_mut()
                    .ok_or_else(|| session_error(line_number, "'drag' before 'press'"))?;
                drag.drag_to(controller, *offset);
            }
            Command::Tick => {
                let drag = self
                    .drag
                    .as_mut()
                    .ok_or_else(|| session_error(line_number, "'tick' before 'press'"))?;
                drag.tick(controller);
            }
            Command::Release => {
                let drag = self
                    .drag
                    .take()
                    .ok_or_else(|| session_error(line_number, "'release' before 'press'"))?;
                drag.end(controller);
            }
            Command::Show => return Ok(Some(controller.display_text())),
        }

        Ok(None)
    }
}

fn session_error(line: usize, message: &str) -> StepperError {
    StepperError::ScriptError {
        line,
        message: message.to_string(),
    }
}
