use super::client::{endpoint, Client};
use crate::error::Result;
use crate::models::requests::SignedRequestSpec;
use crate::models::resources::Student;

impl Client {
    /// `GET /exams/{exam_id}/show_student`: the student behind one session.
    ///
    /// The session id is both signed and sent as a literal query parameter.
    pub fn student(&self, exam_id: u64, student_session_id: u64) -> Result<Student> {
        let spec = SignedRequestSpec::get(endpoint(&format!("/exams/{}/show_student", exam_id)))
            .param("id", exam_id)
            .param("student_session_id", student_session_id)
            .query("student_session_id", student_session_id);
        self.fetch(&spec, "student")
    }

    /// `GET /exams/{exam_id}/index_students`
    pub fn students(&self, exam_id: u64) -> Result<Vec<Student>> {
        let spec = SignedRequestSpec::get(endpoint(&format!("/exams/{}/index_students", exam_id)))
            .param("id", exam_id);
        self.fetch(&spec, "students")
    }
}
