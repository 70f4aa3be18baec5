//! # Role Console
//!
//! Orchestration core of the role management screen: surface state,
//! operator workflows (create, update, confirmation-gated delete) and the
//! narrow seams through which a host UI plugs in notifications, dialogs,
//! the data table and localization.
//!
//! The screen's rendering is deliberately absent; pair this crate with
//! any front-end that can implement [`Notifier`], [`ConfirmGate`] and
//! [`TableHandle`].

pub mod console;
pub mod messages;
pub mod state;
pub mod ui;

pub use console::RoleConsole;
pub use messages::{EnglishCatalog, MessageCatalog, MessageId};
pub use state::ConsoleState;
pub use ui::{ConfirmGate, Notice, Notifier, TableHandle};
