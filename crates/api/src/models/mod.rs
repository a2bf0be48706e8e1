//! Domain models for the registration API.
//!
//! One module per entity kind. Records serialize in the camelCase wire
//! format the front-end consumes; money fields serialize as decimal strings
//! (`"1200.00"`). The `New*` types are the store-level inputs; identifiers
//! and creation timestamps are always assigned by the store, never by the
//! caller.

pub mod course;
pub mod payment;
pub mod registration;
pub mod student;
pub mod user;

pub use course::{Course, CoursePatch, NewCourse};
pub use payment::{NewPayment, Payment};
pub use registration::{
    NewRegistration, Registration, RegistrationWithCourse, RegistrationWithDetails,
};
pub use student::{NewStudent, Student, StudentPatch, StudentWithRegistrations};
pub use user::{NewUser, User};
