//! Labeled report of computed quantities
//!
//! A [`Report`] is an ordered list of [`Section`]s, one per worksheet part.
//! It renders either as plain text (one `label: value unit` row per
//! quantity) or as JSON.

pub mod format;

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// How a value is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "style", content = "digits", rename_all = "snake_case")]
pub enum Notation {
    /// Fixed-point with the given number of decimals
    Fixed(usize),
    /// Scientific with the given number of mantissa decimals
    Scientific(usize),
    /// Shortest round-trip representation
    Shortest,
}

impl Notation {
    /// Render a value in this notation
    pub fn apply(&self, value: f64) -> String {
        match *self {
            Notation::Fixed(digits) => format::fixed(value, digits),
            Notation::Scientific(digits) => format::scientific(value, digits),
            Notation::Shortest => format::shortest(value),
        }
    }
}

/// Text between a quantity's label and its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Joiner {
    /// `label: value unit`
    #[default]
    Colon,
    /// `label is value unit`, for sentence-style rows
    Is,
}

impl Joiner {
    fn as_str(&self) -> &'static str {
        match self {
            Joiner::Colon => ": ",
            Joiner::Is => " is ",
        }
    }
}

/// A single labeled value with its unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quantity {
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub notation: Notation,
    #[serde(skip)]
    pub joiner: Joiner,
}

impl Quantity {
    /// Quantity printed as `label: value unit`
    pub fn new(
        label: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        notation: Notation,
    ) -> Self {
        Self {
            label: label.into(),
            value,
            unit: unit.into(),
            notation,
            joiner: Joiner::Colon,
        }
    }

    /// Switch to sentence form, `label is value unit`
    pub fn phrased(mut self) -> Self {
        self.joiner = Joiner::Is;
        self
    }

    /// The formatted row without a trailing newline
    ///
    /// Dimensionless quantities (empty unit) end right after the value.
    pub fn render(&self) -> String {
        let value = self.notation.apply(self.value);
        let joiner = self.joiner.as_str();
        if self.unit.is_empty() {
            format!("{}{joiner}{value}", self.label)
        } else {
            format!("{}{joiner}{value} {}", self.label, self.unit)
        }
    }
}

/// One row of a section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Line {
    Quantity(Quantity),
    Blank,
}

/// Results of a single worksheet part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub part: u8,
    pub lines: Vec<Line>,
}

impl Section {
    /// Empty section for the given part number
    pub fn new(part: u8) -> Self {
        Self {
            part,
            lines: Vec::new(),
        }
    }

    /// Append a `label: value unit` row
    pub fn quantity(
        &mut self,
        label: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        notation: Notation,
    ) -> &mut Self {
        self.push(Quantity::new(label, value, unit, notation))
    }

    /// Append a sentence-style `label is value unit` row
    pub fn sentence(
        &mut self,
        label: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        notation: Notation,
    ) -> &mut Self {
        self.push(Quantity::new(label, value, unit, notation).phrased())
    }

    /// Append a prebuilt quantity row
    pub fn push(&mut self, quantity: Quantity) -> &mut Self {
        self.lines.push(Line::Quantity(quantity));
        self
    }

    /// Append an empty separator row
    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(Line::Blank);
        self
    }

    /// Header row, `Part N:`
    pub fn title(&self) -> String {
        format!("Part {}:", self.part)
    }

    /// Iterate over the quantities, skipping separators
    pub fn quantities(&self) -> impl Iterator<Item = &Quantity> {
        self.lines.iter().filter_map(|line| match line {
            Line::Quantity(q) => Some(q),
            Line::Blank => None,
        })
    }

    /// Look up a quantity by its exact label
    pub fn get(&self, label: &str) -> Option<&Quantity> {
        self.quantities().find(|q| q.label == label)
    }

    /// Plain text block, newline terminated
    pub fn render_text(&self) -> String {
        let mut out = self.title();
        out.push('\n');
        for line in &self.lines {
            if let Line::Quantity(q) = line {
                out.push_str(&q.render());
            }
            out.push('\n');
        }
        out
    }
}

/// Output encoding of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Labeled plain text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Ordered collection of worksheet sections
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    /// Report from sections in print order
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Section for a part number, if present
    pub fn section(&self, part: u8) -> Option<&Section> {
        self.sections.iter().find(|s| s.part == part)
    }

    /// All sections as plain text
    pub fn render_text(&self) -> String {
        self.sections.iter().map(Section::render_text).collect()
    }

    /// All sections as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => {
                let mut json = self.to_json()?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    /// Write the rendered report to a file
    pub fn save<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<()> {
        let rendered = self.render(format)?;
        fs::write(path.as_ref(), rendered)?;
        log::info!("Wrote report to {}", path.as_ref().display());
        Ok(())
    }
}
