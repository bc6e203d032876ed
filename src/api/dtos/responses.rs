use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::services::slot_grid::SlotDescriptor;

#[derive(Serialize)]
pub struct CalendarResponse {
    pub provider_id: String,
    pub date: NaiveDate,
    pub slots: Vec<SlotDescriptor>,
}
