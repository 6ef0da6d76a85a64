pub mod chain;
pub mod demo;
pub mod missing;
