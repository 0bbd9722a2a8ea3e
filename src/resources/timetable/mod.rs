mod model;
mod service;

pub use model::{
    CreateTimeSlotRequest, CreateTimetableEntryRequest, DayOfWeek, TimeSlot, TimetableEntry,
    UpdateTimetableEntryRequest, week_grid,
};
pub use service::TimetableService;
