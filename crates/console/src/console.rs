use crate::error::{CommandError, Result};
use figures_store::{FigureKind, FigureStore};
use std::io::{BufRead, Write};

pub const MENU: &str = "Choose an operation:\n\
1) add a figure\n\
2) get the total area of all figures\n\
3) get the total perimeter of all figures\n\
4) exit";
pub const FIGURE_TYPE_PROMPT: &str = "Enter the figure type (1 - Square, 2 - Circle):";
pub const PROPERTY_PROMPT: &str = "Enter the property value:";

/// Top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Insert,
    TotalArea,
    TotalPerimeter,
    Exit,
}

impl Operation {
    /// Matches the line exactly; surrounding whitespace makes it unknown.
    pub fn parse(input: &str) -> Result<Self> {
        match input {
            "1" => Ok(Self::Insert),
            "2" => Ok(Self::TotalArea),
            "3" => Ok(Self::TotalPerimeter),
            "4" => Ok(Self::Exit),
            other => Err(CommandError::UnknownOperation(other.to_string())),
        }
    }
}

pub fn parse_figure_kind(input: &str) -> Result<FigureKind> {
    match input {
        "1" => Ok(FigureKind::Square),
        "2" => Ok(FigureKind::Circle),
        other => Err(CommandError::InvalidFigureType(other.to_string())),
    }
}

/// Parses any `f64` literal, `NaN` and `inf` included; range checks belong to the store.
pub fn parse_property(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidPropertyValue(trimmed.to_string()))
}

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven session over a single figure store.
pub struct Console<'a, R, W> {
    store: &'a mut FigureStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(store: &'a mut FigureStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until the exit operation or end of input.
    ///
    /// Only [`CommandError::Io`] escapes; every other error is printed and the menu is shown again.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.say(MENU)?;
            let Some(line) = self.read_line()? else {
                log::debug!("input closed, leaving the menu loop");
                return Ok(());
            };

            match self.dispatch(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(err) if err.is_recoverable() => {
                    log::debug!("recovered from {err:?}");
                    self.say(&err.to_string())?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> Result<Flow> {
        match Operation::parse(line)? {
            Operation::Insert => self.insert_figure()?,
            Operation::TotalArea => {
                let area = self.store.total_area();
                self.say(&format!("total area: {area}"))?;
            }
            Operation::TotalPerimeter => {
                let perimeter = self.store.total_perimeter();
                self.say(&format!("total perimeter: {perimeter}"))?;
            }
            Operation::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn insert_figure(&mut self) -> Result<()> {
        self.say(FIGURE_TYPE_PROMPT)?;
        let kind = parse_figure_kind(&self.read_line()?.unwrap_or_default())?;

        self.say(PROPERTY_PROMPT)?;
        let property = parse_property(&self.read_line()?.unwrap_or_default())?;

        self.store.add(kind, property)?;
        self.say(&format!("figure added: {kind}({property})"))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }
}
