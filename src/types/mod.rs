pub mod dto;
pub mod response;

pub use dto::{Application, Interview, Job, ScreeningResult, Slot};
pub use response::{ApplyResponse, JobCreateResponse};
