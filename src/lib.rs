//! Client for the ProctorExam v3 REST API.
//!
//! Every request is authenticated with a fresh `nonce` and `timestamp` and an
//! HMAC-SHA256 `signature` over the sorted request parameters, plus a
//! `Token token=<api key>` authorization header. Responses are decoded into
//! typed [`Exam`], [`User`] and [`Student`] records.
//!
//! # Example
//!
//! ```rust,no_run
//! use proctorexam::{Client, ClientConfig};
//!
//! # fn main() -> proctorexam::Result<()> {
//! let config = ClientConfig::new("https://exam.example.com", "api-key", "api-secret")?;
//! let client = Client::new(config)?;
//!
//! for exam in client.exams()? {
//!     println!("{} {}", exam.id, exam.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use api::client::Client;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use models::params::ParameterSet;
pub use models::requests::SignedRequestSpec;
pub use models::resources::{Exam, Student, User};
pub use services::nonce::{Clock, CounterNonce, NonceSource, RandomNonce, SystemClock};
pub use services::request::RequestBuilder;
pub use services::signer::Signer;
