pub mod balance;
pub mod config;
pub mod constants;
pub mod cooking;
pub mod edit;
pub mod portion;
pub mod ratio;
pub mod resolver;

pub use balance::{MacroBalance, MacroShares, calorie_shares, evaluate, evaluate_with};
pub use config::{BalanceBands, Band, EngineConfig};
pub use constants::*;
pub use cooking::{CookingAdjustment, apply as apply_cooking};
pub use edit::{Edit, EditSource, MacroSnapshot, apply_edit};
pub use portion::{meal_totals, scale_to_portion};
pub use ratio::{axis_bounds, set_axis, set_axis_within_bounds};
pub use resolver::{caloric_sum, calories_from_macros, macros_from_calories_and_ratio, ratio_of};
