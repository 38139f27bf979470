//! One module per yabai message category.
//!
//! Every function builds an argument vector from typed parameters and hands
//! it to the client choke point; queries additionally pipe stdout through
//! the response parser. Writes return `Result<()>`.

mod display;
mod query;
mod rule;
mod signal;
mod space;
mod window;
