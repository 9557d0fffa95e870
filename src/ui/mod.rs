mod app;
mod components;
pub mod notice;
pub mod state;

pub use app::ChatApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Chat,
    About,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Chat => "Chat",
            Page::About => "About",
        }
    }
}
