mod area;
mod belief;
mod commander;
mod commander_cli;
mod commander_greedy;
mod common;
mod config;
mod game;
mod grid;
mod logging;
mod search;
mod session;

pub use area::*;
pub use belief::*;
pub use commander::*;
pub use commander_cli::*;
pub use commander_greedy::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::{CellGrid, GridError};
pub use logging::init_logging;
pub use search::*;
pub use session::*;
