//! Terminal interaction widgets.

pub mod picker;

pub use picker::pick;
