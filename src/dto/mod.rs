pub mod application_dto;
pub mod auth_dto;
pub mod feedback_dto;
pub mod job_dto;
pub mod notification_dto;
pub mod query_dto;

use serde::Serialize;

/// List envelope shared by the collection endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> DataResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
