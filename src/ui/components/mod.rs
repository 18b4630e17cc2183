pub mod kpi_card;
pub mod product_card;
pub mod requests_table;
pub mod stage_progress;
pub mod status_badge;
pub mod toast;
