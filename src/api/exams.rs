use super::client::{endpoint, Client};
use crate::error::Result;
use crate::models::requests::SignedRequestSpec;
use crate::models::resources::Exam;

impl Client {
    /// `GET /exams`: every exam visible to the API key.
    pub fn exams(&self) -> Result<Vec<Exam>> {
        let spec = SignedRequestSpec::get(endpoint("/exams"));
        self.fetch(&spec, "exams")
    }

    /// `GET /exams/{id}`
    pub fn exam(&self, id: u64) -> Result<Exam> {
        let spec = SignedRequestSpec::get(endpoint(&format!("/exams/{}", id))).param("id", id);
        self.fetch(&spec, "exam")
    }
}
