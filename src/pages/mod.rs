//! Page components, one per route.

pub mod admin_dashboard;
pub mod admin_login;
pub mod browse_jobs;
pub mod contact;
pub mod contractor_dashboard;
pub mod homeowner_dashboard;
pub mod job_details;
pub(crate) mod job_owner;
pub mod landing;
pub mod login;
pub mod messages;
pub mod not_found;
pub mod payment_success;
pub mod post_job;
pub mod profile;
pub mod register;
