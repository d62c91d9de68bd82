//! Text front end: board rendering, typed input and the prompt loop

mod input;
mod play;
mod render;

pub use input::{is_yes, parse_coordinate, parse_or_default};
pub use play::Console;
pub use render::render_board;
