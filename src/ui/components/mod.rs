pub mod about;
pub mod chat_area;
pub mod chat_header;
pub mod home;
pub mod input_bar;
pub mod name_prompt;
pub mod nav;
pub mod toasts;
