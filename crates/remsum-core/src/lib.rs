pub mod config;
pub mod logging;

pub mod command;
pub mod dialect;
pub mod digest;
pub mod gate;
pub mod hasher;
pub mod line;
pub mod probe;
pub mod quote;
pub mod shell;
