//! Single-open accordion over a fixed set of panels.

use crate::error::widget::WidgetError;
use crate::render::{Widget, WidgetView};

use common::ErrorLocation;

use std::panic::Location;

use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqPanel {
    pub question: String,
    pub answer: String,
}

impl FaqPanel {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqPanelView {
    pub question: String,
    pub answer: String,
    pub is_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqView {
    pub panels: Vec<FaqPanelView>,
}

/// Holding the open panel as one index keeps "at most one open" true by
/// construction.
#[derive(Debug, Clone)]
pub struct FaqAccordion {
    panels: Vec<FaqPanel>,
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn new(panels: Vec<FaqPanel>) -> Self {
        Self { panels, open: None }
    }

    /// Close `index` if it is open, otherwise make it the only open panel.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::UnknownPanel`] if `index` is out of range.
    #[track_caller]
    pub fn toggle(&mut self, index: usize) -> Result<(), WidgetError> {
        if index >= self.panels.len() {
            return Err(WidgetError::UnknownPanel {
                message: format!(
                    "Panel {index} does not exist ({} panels)",
                    self.panels.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!("FAQ open panel: {:?}", self.open);
        Ok(())
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    pub fn panels(&self) -> &[FaqPanel] {
        &self.panels
    }
}

impl Widget for FaqAccordion {
    fn view(&self) -> WidgetView {
        WidgetView::Faq(FaqView {
            panels: self
                .panels
                .iter()
                .enumerate()
                .map(|(index, panel)| FaqPanelView {
                    question: panel.question.clone(),
                    answer: panel.answer.clone(),
                    is_open: self.is_open(index),
                })
                .collect(),
        })
    }
}
