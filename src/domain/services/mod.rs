pub mod expiry_sweep;
pub mod lifecycle;
pub mod pending_view;
pub mod slot_grid;
pub mod working_hours;
