/// Weights of the dominance score, in ascending order of threat level.
/// Goals are deliberately not part of the score.
#[derive(Debug, Clone)]
pub struct ScoringSettings {
    pub delivery_weight: u32,
    pub half_chance_weight: u32,
    pub chance_weight: u32,
    pub massive_no_shot_weight: u32,
    pub massive_shot_weight: u32,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            delivery_weight: 1,
            half_chance_weight: 2,
            chance_weight: 3,
            massive_no_shot_weight: 4,
            massive_shot_weight: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OcrSettings {
    pub endpoint: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("OCR_ENDPOINT")
                .unwrap_or_else(|_| "http://localhost:8089/recognize".to_string()),
            user_agent: "MatchWatcher/0.1",
            timeout_secs: 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClubSettings {
    /// Our own club name, stripped out of fixture lines during import
    pub club_name: String,
}

impl Default for ClubSettings {
    fn default() -> Self {
        Self {
            club_name: std::env::var("CLUB_NAME").unwrap_or_else(|_| "Our Club".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub scoring: ScoringSettings,
    pub ocr: OcrSettings,
    pub club: ClubSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn database_path() -> String {
    std::env::var("DATABASE_PATH").unwrap_or_else(|_| "match_watcher.db".to_string())
}
