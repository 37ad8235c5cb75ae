//! ECS Declarations
//!
//! A small model of the declaration language understood by the `ecs::`
//! compile-time configuration library: empty type declarations, the variadic
//! type lists (`ComponentList`, `TagList`, `Signature`, `SignatureList`), the
//! `Config` binding and the `mask<T>()` diagnostic prints.
//!
//! Each [`Declaration`] renders as exactly one line of C++.
//!
//! # Example
//!
//! ```
//! use ecs_decl::{allocate, Declaration, NameKind, TypeListKind};
//!
//! let comps = allocate(NameKind::Component, 2);
//! let list = Declaration::type_list(TypeListKind::Components, &comps);
//! assert_eq!(list.to_string(), "using CompTypes = ecs::ComponentList<C0, C1>;");
//! ```

pub mod decl;
pub mod names;

pub use decl::{
    Declaration, MaskTarget, TypeListKind, CONFIG_ALIAS, FULL_SIGNATURE_LABEL, SIGNATURE_ALIAS,
    SIGNATURE_LIST_ALIAS,
};
pub use names::{allocate, NameKind, TypeName};
