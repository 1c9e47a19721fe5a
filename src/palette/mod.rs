mod action;
mod registry;

pub use action::{Action, ActionHandler};
pub use registry::{visible_ancestors, CommandPalette};
