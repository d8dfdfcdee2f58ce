//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;
mod pointer;

pub use command::AppCommand;
pub use intent::AppIntent;
pub use pointer::{PointerEvent, PointerPhase};
