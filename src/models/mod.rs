pub mod appointment;
pub mod doctor;

pub use appointment::BookingRequest;
pub use doctor::Doctor;
