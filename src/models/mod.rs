pub mod params;
pub mod requests;
pub mod resources;
pub mod responses;
