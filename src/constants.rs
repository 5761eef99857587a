pub const APP_DIRECTORY_NAME: &str = ".player-catalog";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "player-catalog.log";
pub const FAVORITES_FILE_NAME: &str = "player_favorites.json";
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/150/150";
pub const UNKNOWN_TEAM_LABEL: &str = "Unknown team";
pub const NO_FAVORITES_MESSAGE: &str = "you have no favorite players saved";
pub const SUBMIT_FAILED_MESSAGE: &str = "could not add the player, please try again";
pub const MIN_AGE: u8 = 16;
pub const MAX_AGE: u8 = 45;
pub const MIN_SHIRT_NUMBER: u8 = 1;
pub const MAX_SHIRT_NUMBER: u8 = 99;
pub const MIN_HEIGHT_CM: u16 = 150;
pub const MAX_HEIGHT_CM: u16 = 220;
pub const MIN_WEIGHT_KG: u16 = 50;
pub const MAX_WEIGHT_KG: u16 = 120;
pub const HIGH_MARKET_VALUE: u64 = 100_000_000;
pub const MEDIUM_MARKET_VALUE: u64 = 50_000_000;
