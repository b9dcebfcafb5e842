//! Console output for the one-shot `--ask` mode

pub mod ask;
pub mod console;
