//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::fixtures::*;
pub use crate::{
    assert_empty, assert_eq_unordered, assert_err, assert_none, assert_ok, tests, DbTest,
    StaleReadDriver,
};

pub use clubhouse::{
    Address, AddressRegistry, Club, ClubRegistry, Created, Db, Document, DocumentStore,
    DocumentType, FieldType, FormField, FormFieldEngine, Id, Membership, MembershipData,
    MembershipRegistry, Model, NewFormField, NewUser, Place, PlaceRegistry, PostalAddress,
    User, UserRegistry,
};
