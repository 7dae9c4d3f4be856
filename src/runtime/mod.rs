//! Request/response surface for form actions and API routes.

pub mod api;

pub use api::{
    allowed_statuses, health, update_load_status_action, update_load_status_form, ActionResult,
    AllowedStatusesResponse, Health, UpdateLoadStatusRequest,
};
