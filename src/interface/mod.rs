pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_summary_csv;
pub use prompts::{
    collect_order_details, prompt_client_name, prompt_event_date, prompt_headcount,
    prompt_menu_items, prompt_serving_style, prompt_yes_no,
};
pub use render::{
    display_ingredient_summary, display_ingredients, display_menu_items, display_orders,
};
