// Adapters layer: HTTP clients for the job search services.

pub mod head_hunter;
pub mod super_job;

pub use head_hunter::{HeadHunterClient, HhSalary, HhVacancy};
pub use super_job::{SjVacancy, SuperJobClient};
