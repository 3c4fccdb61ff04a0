pub mod action;
pub mod command;
pub mod context;
pub mod counter;
pub mod effect;
pub mod event;
pub mod module;
pub mod presenter;
pub mod router;
pub mod state;
pub mod surface;
pub mod update;

pub use action::{Action, NotifyLevel};
pub use command::{parse_command, Command};
pub use context::Context;
pub use counter::{format_count, CounterAnimation, TICK_MS};
pub use effect::{BodyLine, Effect};
pub use event::UiEvent;
pub use module::{list_row_at, render_list, step_selection, Module};
pub use state::{ModalState, UiState};
pub use surface::Surface;
pub use update::update;
