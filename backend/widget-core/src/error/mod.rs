pub mod calculator;
pub mod config;
pub mod profile;
pub mod widget;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Calculator(#[from] calculator::CalculatorError),

    #[error(transparent)]
    Profile(#[from] profile::ProfileError),

    #[error(transparent)]
    Widget(#[from] widget::WidgetError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}
