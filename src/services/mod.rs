//! Workflow layer orchestrating the data model.

pub mod contact_service;

pub use contact_service::{
    add_birthday, add_contact, birthdays, change_contact, show_all, show_birthday, show_phone,
};
