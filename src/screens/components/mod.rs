pub mod navigation_footer;
pub mod notify_banner;
pub mod player_form;
pub mod player_profile;
pub mod select;
pub mod text_box;
