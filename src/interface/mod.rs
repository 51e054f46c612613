pub mod prompts;
pub mod render;

pub use prompts::{
    DEFAULT_GOALS, prompt_eaten_foods, prompt_goals, prompt_number, prompt_yes_no,
};
pub use render::{display_food_list, display_goals, display_plan_report};
