//! Reusable view components

pub mod badge;
pub mod dialog;
pub mod empty_state;
pub mod filter_bar;
pub mod layout;
pub mod sidebar;
pub mod stat_card;
pub mod toast;

pub use badge::{Badge, StatusTone, Tone};
pub use dialog::{Dialog, SelectField, TextAreaField, TextField};
pub use empty_state::EmptyState;
pub use filter_bar::{FilterBar, SelectOption};
pub use layout::{Layout, render_document};
pub use stat_card::StatCard;
pub use toast::{Notice, Toast};
