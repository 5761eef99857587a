pub mod components;
pub mod player_list_screen;
pub mod screen;
