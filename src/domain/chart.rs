// Chart configuration domain models - the boundary handed to the chart widget
use crate::util::format::format_currency;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// How the value-axis ticks are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TickFormat {
    /// Whole counts, unit step size.
    Count,
    /// "Rs." currency strings.
    Currency,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub fill: bool,
}

impl Dataset {
    pub fn new(label: String, data: Vec<f64>, background_color: Vec<String>) -> Self {
        Self {
            label,
            data,
            background_color,
            border_color: None,
            fill: false,
        }
    }

    pub fn with_border(mut self, color: String) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = true;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub orientation: Orientation,
    pub stacked: bool,
    pub begin_at_zero: bool,
    pub tick_format: TickFormat,
}

impl ChartConfig {
    pub fn bar(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            kind: ChartKind::Bar,
            labels,
            datasets,
            orientation: Orientation::Vertical,
            stacked: false,
            begin_at_zero: true,
            tick_format: TickFormat::Count,
        }
    }

    pub fn line(labels: Vec<String>, datasets: Vec<Dataset>) -> Self {
        Self {
            kind: ChartKind::Line,
            labels,
            datasets,
            orientation: Orientation::Vertical,
            stacked: false,
            begin_at_zero: true,
            tick_format: TickFormat::Count,
        }
    }

    /// Render one value-axis tick label.
    pub fn format_tick(&self, value: f64) -> String {
        match self.tick_format {
            TickFormat::Count => format!("{}", value as i64),
            TickFormat::Currency => format_currency(value),
        }
    }
}
