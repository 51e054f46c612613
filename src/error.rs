use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("You have hit your calorie goal ({remaining:.0} kcal remaining)")]
    CalorieGoalReached { remaining: f64 },

    #[error("Strict macro goals not met")]
    NoSolutionFound,
}

impl PlanError {
    /// Outcomes that are a normal negative answer rather than a failure.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self,
            PlanError::NoSolutionFound | PlanError::CalorieGoalReached { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
