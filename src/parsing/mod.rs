pub mod fixture_text;
pub mod stats_text;

pub use fixture_text::FixtureParser;
pub use stats_text::{parse_stats_text, ParsedObservation};
