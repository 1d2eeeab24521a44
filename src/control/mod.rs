mod commander;

pub use commander::{Commander, ControlInstruction};
