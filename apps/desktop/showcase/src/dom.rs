//! In-memory document the page renders into.
//!
//! Mirrors the markup the widgets were written against: elements are
//! addressed by the same ids and classes (`.calc-display`, `#taskCounter`,
//! `#successMessage`, ...). Rendering only ever changes text, classes,
//! attributes and display visibility.

use widget_core::calculator::CalculatorView;
use widget_core::faq::FaqView;
use widget_core::feedback::FeedbackView;
use widget_core::nav::NavView;
use widget_core::profile::ProfileView;
use widget_core::render::{Renderer, WidgetView};
use widget_core::tasks::TaskListView;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{Display, Formatter, Result as FormatResult};

pub const HAMBURGER: &str = ".hamburger";
pub const NAV_LINKS: &str = ".nav-links";
pub const CALC_DISPLAY: &str = ".calc-display";
pub const TASK_INPUT: &str = "#taskInput";
pub const TASK_LIST: &str = ".task-list";
pub const TASK_COUNTER: &str = "#taskCounter";
pub const GENERATE_USER_BUTTON: &str = "#generateUserBtn";
pub const USER_NAME: &str = ".user-name";
pub const USER_EMAIL: &str = ".user-email";
pub const USER_IMAGE: &str = ".user-img";
pub const FAQ_LIST: &str = ".faq";
pub const NAME_INPUT: &str = "#name";
pub const EMAIL_INPUT: &str = "#email";
pub const MESSAGE_INPUT: &str = "#message";
pub const RATING_INPUT: &str = "#rating";
pub const STARS: &str = ".rating";
pub const NAME_ERROR: &str = "#nameError";
pub const EMAIL_ERROR: &str = "#emailError";
pub const RATING_ERROR: &str = "#ratingError";
pub const MESSAGE_ERROR: &str = "#messageError";
pub const SUCCESS_MESSAGE: &str = "#successMessage";

const ACTIVE: &str = "active";
const VALUE: &str = "value";
const DISABLED: &str = "disabled";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub text: String,
    pub classes: BTreeSet<String>,
    pub attributes: BTreeMap<String, String>,
    /// `false` is `style.display = 'none'`.
    pub visible: bool,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            classes: BTreeSet::new(),
            attributes: BTreeMap::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn set_attr(&mut self, key: &str, value: impl Into<String>) {
        self.attributes.insert(key.to_string(), value.into());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    elements: BTreeMap<&'static str, Element>,
}

impl Document {
    /// The page as it looks before any widget has rendered.
    pub fn new() -> Self {
        let elements = [
            (HAMBURGER, Element::new("div").with_class("hamburger")),
            (NAV_LINKS, Element::new("ul").with_class("nav-links")),
            (
                CALC_DISPLAY,
                Element::new("input")
                    .with_class("calc-display")
                    .with_attr(VALUE, "0"),
            ),
            (TASK_INPUT, Element::new("input").with_attr(VALUE, "")),
            (TASK_LIST, Element::new("ul").with_class("task-list")),
            (TASK_COUNTER, Element::new("span").with_text("0")),
            (GENERATE_USER_BUTTON, Element::new("button")),
            (USER_NAME, Element::new("h3").with_class("user-name")),
            (USER_EMAIL, Element::new("p").with_class("user-email")),
            (USER_IMAGE, Element::new("img").with_class("user-img")),
            (FAQ_LIST, Element::new("div").with_class("faq")),
            (NAME_INPUT, Element::new("input").with_attr(VALUE, "")),
            (EMAIL_INPUT, Element::new("input").with_attr(VALUE, "")),
            (MESSAGE_INPUT, Element::new("textarea").with_attr(VALUE, "")),
            (RATING_INPUT, Element::new("input").with_attr(VALUE, "0")),
            (STARS, Element::new("div").with_class("rating")),
            (NAME_ERROR, error_message("Please enter your name")),
            (EMAIL_ERROR, error_message("Please enter a valid email")),
            (RATING_ERROR, error_message("Please select a rating")),
            (MESSAGE_ERROR, error_message("Please enter a message")),
            (
                SUCCESS_MESSAGE,
                Element::new("div")
                    .with_text("Thank you for your feedback!")
                    .hidden(),
            ),
        ];

        Self {
            elements: elements.into_iter().collect(),
        }
    }

    pub fn element(&self, selector: &str) -> Option<&Element> {
        self.elements.get(selector)
    }

    pub fn text(&self, selector: &str) -> Option<&str> {
        self.element(selector).map(|element| element.text.as_str())
    }

    pub fn value(&self, selector: &str) -> Option<&str> {
        self.element(selector).and_then(|element| element.attr(VALUE))
    }

    pub fn is_visible(&self, selector: &str) -> bool {
        self.element(selector).is_some_and(|element| element.visible)
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.element(selector)
            .is_some_and(|element| element.has_class(class))
    }

    /// Text of each child, e.g. the task items.
    pub fn child_texts(&self, selector: &str) -> Vec<&str> {
        self.element(selector)
            .map(|element| {
                element
                    .children
                    .iter()
                    .map(|child| child.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn element_mut(&mut self, selector: &'static str) -> &mut Element {
        self.elements
            .entry(selector)
            .or_insert_with(|| Element::new("div"))
    }

    fn render_nav(&mut self, view: &NavView) {
        self.element_mut(HAMBURGER).set_class(ACTIVE, view.open);
        self.element_mut(NAV_LINKS).set_class(ACTIVE, view.open);
    }

    fn render_calculator(&mut self, view: &CalculatorView) {
        self.element_mut(CALC_DISPLAY)
            .set_attr(VALUE, view.display.as_str());
    }

    fn render_tasks(&mut self, view: &TaskListView) {
        self.element_mut(TASK_INPUT)
            .set_attr(VALUE, view.input.as_str());
        self.element_mut(TASK_LIST).children = view
            .entries
            .iter()
            .map(|entry| {
                Element::new("li")
                    .with_class("task-item")
                    .with_attr("data-id", &entry.id.to_string())
                    .with_text(&entry.text)
            })
            .collect();
        self.element_mut(TASK_COUNTER).text = view.count.to_string();
    }

    fn render_profile(&mut self, view: &ProfileView) {
        let button = self.element_mut(GENERATE_USER_BUTTON);
        button.text = view.trigger_label.to_string();
        if view.trigger_enabled {
            button.attributes.remove(DISABLED);
        } else {
            button.set_attr(DISABLED, "");
        }

        // Without a profile the placeholder markup stays as it is.
        if let Some(profile) = &view.profile {
            self.element_mut(USER_NAME).text = profile.full_name();
            self.element_mut(USER_EMAIL).text = profile.email.clone();
            self.element_mut(USER_IMAGE)
                .set_attr("src", profile.avatar_url.as_str());
        }
    }

    fn render_faq(&mut self, view: &FaqView) {
        self.element_mut(FAQ_LIST).children = view
            .panels
            .iter()
            .map(|panel| {
                let mut item = Element::new("div")
                    .with_class("faq-item")
                    .with_text(&panel.question);
                item.set_class(ACTIVE, panel.is_open);
                item.children = vec![
                    Element::new("div")
                        .with_class("faq-answer")
                        .with_text(&panel.answer),
                ];
                item
            })
            .collect();
    }

    fn render_feedback(&mut self, view: &FeedbackView) {
        self.element_mut(NAME_INPUT).set_attr(VALUE, view.name.as_str());
        self.element_mut(EMAIL_INPUT)
            .set_attr(VALUE, view.email.as_str());
        self.element_mut(MESSAGE_INPUT)
            .set_attr(VALUE, view.message.as_str());
        self.element_mut(RATING_INPUT)
            .set_attr(VALUE, view.rating.to_string());

        self.element_mut(STARS).children = view
            .stars
            .iter()
            .enumerate()
            .map(|(index, active)| {
                let mut star = Element::new("i")
                    .with_class("star")
                    .with_attr("data-value", &(index + 1).to_string());
                star.set_class("fas", *active);
                star.set_class(ACTIVE, *active);
                star.set_class("far", !*active);
                star
            })
            .collect();

        self.element_mut(NAME_ERROR).visible = view.errors.name;
        self.element_mut(EMAIL_ERROR).visible = view.errors.email;
        self.element_mut(RATING_ERROR).visible = view.errors.rating;
        self.element_mut(MESSAGE_ERROR).visible = view.errors.message;
        self.element_mut(SUCCESS_MESSAGE).visible = view.success_visible;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Document {
    fn render(&mut self, view: &WidgetView) {
        match view {
            WidgetView::Nav(view) => self.render_nav(view),
            WidgetView::Calculator(view) => self.render_calculator(view),
            WidgetView::Tasks(view) => self.render_tasks(view),
            WidgetView::Profile(view) => self.render_profile(view),
            WidgetView::Faq(view) => self.render_faq(view),
            WidgetView::Feedback(view) => self.render_feedback(view),
        }
    }
}

impl Display for Document {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        for (selector, element) in &self.elements {
            write_element(formatter, selector, element, 0)?;
        }
        Ok(())
    }
}

fn write_element(
    formatter: &mut Formatter<'_>,
    label: &str,
    element: &Element,
    depth: usize,
) -> FormatResult {
    write!(formatter, "{:indent$}{label}", "", indent = depth * 2)?;
    if !element.classes.is_empty() {
        let classes: Vec<&str> = element.classes.iter().map(String::as_str).collect();
        write!(formatter, " [{}]", classes.join(" "))?;
    }
    for (key, value) in &element.attributes {
        write!(formatter, " {key}={value:?}")?;
    }
    if !element.text.is_empty() {
        write!(formatter, " {:?}", element.text)?;
    }
    if !element.visible {
        write!(formatter, " (hidden)")?;
    }
    writeln!(formatter)?;

    for child in &element.children {
        write_element(formatter, &child.tag, child, depth + 1)?;
    }
    Ok(())
}

fn error_message(text: &str) -> Element {
    Element::new("div")
        .with_class("error-message")
        .with_text(text)
        .hidden()
}
