mod aqi_category;
pub mod handlers;
mod theme;
mod view;

pub use aqi_category::AqiBadge;
pub use theme::BackgroundTheme;
pub use view::DashboardView;
