pub mod analytics;
pub mod fixture_import;
pub mod import;

pub use analytics::AnalyticsService;
pub use fixture_import::FixtureImportService;
pub use import::ImportService;
