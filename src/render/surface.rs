//! Draw surfaces
//!
//! A surface is the render-target handle passed into every draw call. It is
//! the only thing that writes pixels.

use super::scene::DrawCommand;

pub trait Surface {
    /// Execute the commands in order
    fn draw(&mut self, commands: &[DrawCommand]);
}

/// Keeps every batch it is asked to draw (tests and headless runs)
#[derive(Debug, Default)]
pub struct RecordingSurface {
    batches: Vec<Vec<DrawCommand>>,
    /// Oldest batches are dropped beyond this many (`None` = keep all)
    limit: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only retain the most recent `limit` batches
    pub fn with_limit(limit: usize) -> Self {
        Self {
            batches: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn batches(&self) -> &[Vec<DrawCommand>] {
        &self.batches
    }

    pub fn last(&self) -> Option<&[DrawCommand]> {
        self.batches.last().map(Vec::as_slice)
    }

    /// Every text drawn, oldest first
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.batches.iter().flatten().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn draw(&mut self, commands: &[DrawCommand]) {
        self.batches.push(commands.to_vec());
        if let Some(limit) = self.limit {
            if self.batches.len() > limit {
                let excess = self.batches.len() - limit;
                self.batches.drain(..excess);
            }
        }
    }
}
