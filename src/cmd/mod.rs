/// Generic message decode command.
pub mod decode;
/// Message-level information command.
pub mod info;
/// Value tree text rendering.
pub mod print;

mod util;
