pub mod emergency;
pub mod header;

pub use emergency::EmergencyButton;
pub use header::Header;
