// src/domain/account/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Account, AccountUpdate, NewAccount};
pub use repository::AccountRepository;
pub use value_objects::{
    AccountId, Capability, DeliverySpeed, DisplayName, EmailAddress, PasswordHash, Preferences,
    PreferencesPatch, Role,
};
