//! Rendering seam between widget logic and the document.
//!
//! Widgets never touch markup. After every transition the host asks the
//! widget for a [`WidgetView`] snapshot and hands it to a [`Renderer`],
//! which owns the mapping onto elements, classes and visibility.

use crate::calculator::CalculatorView;
use crate::faq::FaqView;
use crate::feedback::FeedbackView;
use crate::nav::NavView;
use crate::profile::ProfileView;
use crate::tasks::TaskListView;

/// Snapshot of one widget's visible state.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView {
    Nav(NavView),
    Calculator(CalculatorView),
    Tasks(TaskListView),
    Profile(ProfileView),
    Faq(FaqView),
    Feedback(FeedbackView),
}

/// Anything that can project a widget's state for rendering.
pub trait Widget {
    fn view(&self) -> WidgetView;
}

/// The document side of the seam.
pub trait Renderer {
    fn render(&mut self, view: &WidgetView);
}

/// Render a widget's current state.
pub fn render_widget<W: Widget + ?Sized, R: Renderer + ?Sized>(widget: &W, renderer: &mut R) {
    renderer.render(&widget.view());
}
