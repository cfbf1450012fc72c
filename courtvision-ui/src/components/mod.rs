//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod court;
pub mod loading;
pub mod prediction_banner;
pub mod stat_cards;
pub mod toast;

pub use chart::PerformanceChart;
pub use court::CourtView;
pub use loading::Loading;
pub use prediction_banner::PredictionBanner;
pub use stat_cards::StatCards;
pub use toast::Toast;
