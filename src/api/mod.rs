pub mod client;
mod exams;
mod students;
mod users;
