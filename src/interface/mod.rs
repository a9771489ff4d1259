pub mod prompts;
pub mod render;

pub use prompts::{
    AdjustAction, parse_amount, prompt_action, prompt_amount, prompt_yes_no, resolve_method,
    resolve_preset, run_adjust_session,
};
pub use render::{
    display_balance, display_cooking, display_macros, display_presets, display_ratio,
    display_snapshot, format_delta, ratio_bar,
};
