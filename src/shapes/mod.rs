pub mod dataset;
pub mod draft;
pub mod enums;
pub mod favorites;
pub mod player;
pub mod settings;
pub mod stats;
pub mod team;
