use log::{error, info};
use proctorexam::Client;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Reads PE_ENDPOINT, PE_API_KEY and PE_API_SECRET_KEY, from .env if present
    let client = match Client::from_env() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to configure client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Listing exams from {}", client.config().redacted_base_url());

    match client.exams() {
        Ok(exams) => {
            info!("Received {} exams", exams.len());
            for exam in exams {
                info!("exam {} (institute {}): {}", exam.id, exam.institute_id, exam.name);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error listing exams: {}", e);
            if let Some(body) = e.body() {
                error!("Response body: {}", body);
            }
            ExitCode::FAILURE
        }
    }
}
