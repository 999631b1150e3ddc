// Service module exports

pub mod calendar_math;
pub mod picker;
pub mod settings;
