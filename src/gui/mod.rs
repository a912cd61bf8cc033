pub mod app;
pub mod card_panel;
pub mod modal;
pub mod range_modal;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::TarjetaApp;
