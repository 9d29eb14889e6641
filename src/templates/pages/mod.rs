pub mod home;
pub mod settings;

pub use home::home_page;
pub use settings::settings_page;
