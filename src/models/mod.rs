pub mod appointment;
pub mod chat;
pub mod consultation;
pub mod department;
pub mod doctor;
pub mod enums;
pub mod medical_record;
pub mod patient;
pub mod payment;
pub mod prescription;

pub use appointment::*;
pub use chat::*;
pub use consultation::*;
pub use department::*;
pub use doctor::*;
pub use enums::*;
pub use medical_record::*;
pub use patient::*;
pub use payment::*;
pub use prescription::*;
