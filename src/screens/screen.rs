use async_trait::async_trait;
use ratatui::{crossterm::event::KeyEvent, layout::Rect, Frame};

pub enum AppAction {
    None,
    Quit(std::io::Result<()>),
}

#[async_trait]
pub trait ScreenAsync: Send {
    fn render(&mut self, f: &mut Frame, body: Rect, footer_left: Rect, footer_right: Rect);
    async fn handle_key(&mut self, key: KeyEvent) -> AppAction;
    async fn refresh_data(&mut self);
}
