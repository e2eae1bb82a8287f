//! Entity operations: one module per entity, composing the validation
//! helpers with the keyed stores. Handlers are synchronous free functions
//! over a connection; an operation either fully succeeds or performs no
//! mutation.

pub mod appointment;
pub mod chat;
pub mod consultation;
pub mod department;
pub mod doctor;
pub mod medical_record;
pub mod patient;
pub mod payment;
pub mod prescription;
pub mod validate;

pub use appointment::*;
pub use chat::*;
pub use consultation::*;
pub use department::*;
pub use doctor::*;
pub use medical_record::*;
pub use patient::*;
pub use payment::*;
pub use prescription::*;
