//! Data layer for a club-membership application.
//!
//! Clubs, members and their postal addresses live in a relational store with
//! protecting foreign keys. Places and addresses are shared rows: registries
//! deduplicate them on the way in and delete them once nothing references
//! them any more. Each club also owns an ordered list of custom fields for
//! its membership-request form.

pub mod config;
pub use config::Config;

pub mod db;
pub use db::Db;

pub mod model;
pub use model::{
    Address, Club, Document, DocumentType, FieldType, FormField, Id, Membership, MembershipData,
    Model, Place, User,
};

pub mod registry;
pub use registry::{
    AddressRegistry, ClubRegistry, Created, DocumentStore, FormFieldEngine, MembershipRegistry,
    NewFormField, NewUser, PlaceRegistry, PostalAddress, UserRegistry,
};

pub mod schema;

mod validate;

pub use clubhouse_core::{driver, Error, Result};
