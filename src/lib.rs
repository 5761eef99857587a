pub mod catalog;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod screens;
pub mod shapes;

#[cfg(test)]
mod tests;
