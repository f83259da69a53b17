//! The page actor.
//!
//! All widgets live inside one tokio task that owns their state and
//! handles [`PageEvent`]s sequentially. Every handler runs to completion
//! before the next event is taken, so widgets never see interleaved
//! updates. Long waits (the profile request, the success timer) run in
//! their own tasks and re-enter the actor as events.
//!
//! Reads go through a shared [`Document`] behind an `RwLock`, which the
//! actor re-renders after every event.

use crate::dom::Document;
use crate::error::ShowcaseError;
use crate::event::PageEvent;

use common::ErrorLocation;
use widget_core::calculator::Calculator;
use widget_core::config::PageConfig;
use widget_core::config::faq::FaqConfig;
use widget_core::error::CoreError;
use widget_core::error::widget::WidgetError;
use widget_core::faq::{FaqAccordion, FaqPanel};
use widget_core::feedback::{DEFAULT_SUCCESS_HIDE_DELAY, FeedbackForm, SubmitOutcome};
use widget_core::nav::NavMenu;
use widget_core::profile::{FetchOutcome, ProfileGenerator, ProfileSource};
use widget_core::render::{Renderer, Widget, WidgetView};
use widget_core::tasks::TaskList;

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::{RwLock, mpsc, oneshot};
use tokio::task::AbortHandle;

const EVENT_CHANNEL_CAPACITY: usize = 100;

/// What the page starts with.
#[derive(Debug, Clone)]
pub struct PageSetup {
    pub initial_tasks: Vec<String>,
    pub faq_panels: Vec<FaqPanel>,
    pub success_hide_delay: Duration,
}

impl PageSetup {
    pub fn from_config(page: &PageConfig, faq: &FaqConfig) -> Self {
        Self {
            initial_tasks: page.tasks.initial.clone(),
            faq_panels: faq.panels.clone(),
            success_hide_delay: page.feedback.success_hide_delay(),
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            initial_tasks: Vec::new(),
            faq_panels: FaqConfig::default().panels,
            success_hide_delay: DEFAULT_SUCCESS_HIDE_DELAY,
        }
    }
}

/// Handle to a running page.
///
/// Cheap to clone. The page stays up until [`unmount`](Self::unmount) is
/// called or every handle is dropped.
#[derive(Clone)]
pub struct PageHandle {
    events: mpsc::Sender<PageEvent>,
    document: Arc<RwLock<Document>>,
}

impl PageHandle {
    pub async fn dispatch(&self, event: PageEvent) -> Result<(), ShowcaseError> {
        self.events
            .send(event)
            .await
            .map_err(|e| ShowcaseError::PageClosed {
                message: format!("Page actor stopped: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Resolves once every event dispatched before it has been handled.
    pub async fn flush(&self) -> Result<(), ShowcaseError> {
        let (ack_tx, ack_rx) = oneshot::channel();
        self.dispatch(PageEvent::Flush(ack_tx)).await?;
        ack_rx.await.map_err(|e| ShowcaseError::PageClosed {
            message: format!("Page actor stopped before flushing: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Snapshot of the rendered document.
    pub async fn document(&self) -> Document {
        self.document.read().await.clone()
    }

    pub async fn unmount(&self) -> Result<(), ShowcaseError> {
        self.dispatch(PageEvent::Unmount).await
    }

    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }
}

/// Build every widget, render the initial document and start the actor.
///
/// Must be called from within a tokio runtime.
pub fn spawn_page<S: ProfileSource>(setup: PageSetup, source: Arc<S>) -> PageHandle {
    let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

    let page = Page {
        nav: NavMenu::new(),
        calculator: Calculator::new(),
        tasks: TaskList::with_entries(setup.initial_tasks),
        profile: ProfileGenerator::new(),
        faq: FaqAccordion::new(setup.faq_panels),
        feedback: FeedbackForm::new(setup.success_hide_delay),
        source,
        in_flight: None,
        events: events_tx.downgrade(),
    };

    let mut document = Document::new();
    for view in page.views() {
        document.render(&view);
    }
    let document = Arc::new(RwLock::new(document));

    tokio::spawn(page_actor(events_rx, page, Arc::clone(&document)));
    info!("Page actor spawned");

    PageHandle {
        events: events_tx,
        document,
    }
}

/// Widget state owned by the actor.
struct Page<S> {
    nav: NavMenu,
    calculator: Calculator,
    tasks: TaskList,
    profile: ProfileGenerator,
    faq: FaqAccordion,
    feedback: FeedbackForm,
    source: Arc<S>,
    in_flight: Option<AbortHandle>,
    /// Weak so the channel closes once every handle is gone.
    events: mpsc::WeakSender<PageEvent>,
}

impl<S: ProfileSource> Page<S> {
    fn views(&self) -> [WidgetView; 6] {
        [
            self.nav.view(),
            self.calculator.view(),
            self.tasks.view(),
            self.profile.view(),
            self.faq.view(),
            self.feedback.view(),
        ]
    }

    /// Apply one event. Returns the view of the widget it touched.
    fn handle(&mut self, event: PageEvent) -> Result<Option<WidgetView>, CoreError> {
        let view = match event {
            PageEvent::NavToggle => {
                self.nav.toggle();
                self.nav.view()
            }
            PageEvent::NavLink => {
                self.nav.close();
                self.nav.view()
            }
            PageEvent::CalculatorKey(key) => {
                self.calculator.press(key)?;
                self.calculator.view()
            }
            PageEvent::TaskInput(text) => {
                self.tasks.set_input(text);
                self.tasks.view()
            }
            PageEvent::TaskAdd => {
                self.tasks.add_task();
                self.tasks.view()
            }
            PageEvent::TaskKey(key) => {
                self.tasks.handle_key(&key);
                self.tasks.view()
            }
            PageEvent::TaskDelete(id) => {
                self.tasks.delete_task(id)?;
                self.tasks.view()
            }
            PageEvent::TaskDeleteAt(index) => {
                let id = self
                    .tasks
                    .entries()
                    .get(index)
                    .map(|entry| entry.id)
                    .ok_or_else(|| WidgetError::UnknownTask {
                        message: format!(
                            "No task at position {} (have {})",
                            index + 1,
                            self.tasks.count()
                        ),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                self.tasks.delete_task(id)?;
                self.tasks.view()
            }
            PageEvent::ProfileGenerate => {
                self.start_fetch()?;
                self.profile.view()
            }
            PageEvent::ProfileSettled(outcome) => {
                self.in_flight = None;
                self.profile.finish(outcome);
                self.profile.view()
            }
            PageEvent::FaqToggle(index) => {
                self.faq.toggle(index)?;
                self.faq.view()
            }
            PageEvent::FeedbackInput(field, value) => {
                self.feedback.set_field(field, value);
                self.feedback.view()
            }
            PageEvent::FeedbackRate(value) => {
                self.feedback.set_rating(value)?;
                self.feedback.view()
            }
            PageEvent::FeedbackSubmit => {
                if let SubmitOutcome::Accepted { hide_after } = self.feedback.submit() {
                    self.schedule_hide(hide_after);
                }
                self.feedback.view()
            }
            PageEvent::FeedbackHideSuccess => {
                self.feedback.hide_success();
                self.feedback.view()
            }
            PageEvent::Flush(ack) => {
                if ack.send(()).is_err() {
                    debug!("Flush requester went away");
                }
                return Ok(None);
            }
            PageEvent::Unmount => {
                self.abandon_fetch();
                self.profile.view()
            }
        };

        Ok(Some(view))
    }

    fn start_fetch(&mut self) -> Result<(), CoreError> {
        let task = self.profile.generate(Arc::clone(&self.source))?;

        let Some(events) = self.events.upgrade() else {
            // Nobody can observe the page any more
            task.abort();
            self.profile.finish(FetchOutcome::Abandoned);
            return Ok(());
        };

        self.in_flight = Some(task.abort_handle());
        tokio::spawn(async move {
            let outcome = task.outcome().await;
            if events.send(PageEvent::ProfileSettled(outcome)).await.is_err() {
                debug!("Profile outcome arrived after the page closed");
            }
        });
        Ok(())
    }

    fn abandon_fetch(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
            self.profile.finish(FetchOutcome::Abandoned);
        }
    }

    /// Fire-and-forget: every accepted submit gets its own timer.
    fn schedule_hide(&self, delay: Duration) {
        let Some(events) = self.events.upgrade() else {
            return;
        };

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(PageEvent::FeedbackHideSuccess).await.is_err() {
                debug!("Success timer fired after the page closed");
            }
        });
    }
}

/// The page actor task.
///
/// Owns the widgets and processes events sequentially. Widget errors are
/// host misuse; they are logged and the page carries on.
async fn page_actor<S: ProfileSource>(
    mut events_rx: mpsc::Receiver<PageEvent>,
    mut page: Page<S>,
    document: Arc<RwLock<Document>>,
) {
    info!("Page actor started");

    while let Some(event) = events_rx.recv().await {
        debug!("Page event: {event:?}");
        let unmount = matches!(event, PageEvent::Unmount);

        match page.handle(event) {
            Ok(Some(view)) => document.write().await.render(&view),
            Ok(None) => {}
            Err(e) => warn!("Ignoring page event: {e}"),
        }

        if unmount {
            break;
        }
    }

    page.abandon_fetch();
    info!("Page actor stopped");
}
