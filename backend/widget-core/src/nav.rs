use crate::render::{Widget, WidgetView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavView {
    pub open: bool,
}

/// Mobile navigation menu. The hamburger and the link list share one flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following any nav link closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl Widget for NavMenu {
    fn view(&self) -> WidgetView {
        WidgetView::Nav(NavView { open: self.open })
    }
}
