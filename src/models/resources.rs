use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: u64,
    pub institute_id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub logo_image: Option<String>,
    #[serde(default)]
    pub institute_name: Option<String>,
}

/// A candidate enrolled in an exam, as seen for one student session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: u64,
    pub email: String,
    pub name: String,
    pub status: String,
    pub exam_id: u64,
}
