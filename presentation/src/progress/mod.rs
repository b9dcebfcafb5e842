//! Progress indicators for the one-shot console mode

pub mod reporter;
