//! Action chains and combo resolution.
//!
//! The catalog ([`ActionCatalog`]) is immutable designer data. Each character
//! owns a [`ComboState`]; transitions over it are performed by a short-lived
//! [`ComboResolver`] borrowing both.

mod catalog;
mod command;
mod locomotion;
mod resolver;

pub use catalog::{ActionCatalog, ActionChain, ActionStep, CatalogError};
pub use command::ActionCommand;
pub use locomotion::{LocomotionFlags, LocomotionMode};
pub use resolver::{ComboResolver, ComboState, NO_ACTION};
