// Module exports for models

pub mod calendar_date;
pub mod event_set;
pub mod settings;
pub mod ui;
