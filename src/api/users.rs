use super::client::{endpoint, Client};
use crate::error::Result;
use crate::models::requests::SignedRequestSpec;
use crate::models::resources::User;

impl Client {
    /// `GET /institutes/{institute_id}/users`
    pub fn users(&self, institute_id: u64) -> Result<Vec<User>> {
        let spec = SignedRequestSpec::get(endpoint(&format!("/institutes/{}/users", institute_id)))
            .param("institute_id", institute_id);
        self.fetch(&spec, "users")
    }

    /// `GET /institutes/{institute_id}/users/{id}`
    pub fn user(&self, institute_id: u64, id: u64) -> Result<User> {
        let spec = SignedRequestSpec::get(endpoint(&format!(
            "/institutes/{}/users/{}",
            institute_id, id
        )))
        .param("institute_id", institute_id)
        .param("id", id);
        self.fetch(&spec, "user")
    }
}
