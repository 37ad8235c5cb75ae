//! One-line C++ declarations for the `ecs::` configuration library.
//!
//! Template argument lists are joined with `", "` between elements only; the
//! consuming compiler rejects a trailing comma before `>`. An empty list
//! renders as an empty parameter pack (`ecs::TagList<>`).

use crate::names::TypeName;
use std::fmt;

/// Alias bound to the signature covering every generated type.
pub const SIGNATURE_ALIAS: &str = "S";
/// Alias bound to the singleton signature list.
pub const SIGNATURE_LIST_ALIAS: &str = "Signatures";
/// Alias bound to the final configuration.
pub const CONFIG_ALIAS: &str = "CFG";
/// Label printed in front of the full signature's mask.
pub const FULL_SIGNATURE_LABEL: &str = "Full Sig : ";

/// The two flat type lists a configuration is built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TypeListKind {
    Components,
    Tags,
}

impl TypeListKind {
    pub fn alias(self) -> &'static str {
        match self {
            TypeListKind::Components => "CompTypes",
            TypeListKind::Tags => "TagTypes",
        }
    }

    fn template(self) -> &'static str {
        match self {
            TypeListKind::Components => "ecs::ComponentList",
            TypeListKind::Tags => "ecs::TagList",
        }
    }

    /// Label printed in front of the mask of the last type of this list.
    pub fn last_label(self) -> &'static str {
        match self {
            TypeListKind::Components => "Last Comp : ",
            TypeListKind::Tags => "Last Tag : ",
        }
    }
}

/// What a `mask<T>()` diagnostic evaluates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskTarget {
    /// A single registered component or tag type.
    Type(TypeName),
    /// A registered signature alias.
    Signature(String),
    /// Nothing to evaluate; prints the configuration's empty mask instead.
    Empty,
}

impl MaskTarget {
    /// Mask of the last name in `names`, or [`MaskTarget::Empty`] if there is none.
    pub fn last_of(names: &[TypeName]) -> Self {
        names
            .last()
            .cloned()
            .map_or(MaskTarget::Empty, MaskTarget::Type)
    }
}

/// A single emitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    /// `struct C0 {};`
    EmptyType(TypeName),
    /// `using CompTypes = ecs::ComponentList<C0, C1>;`
    TypeList {
        kind: TypeListKind,
        items: Vec<TypeName>,
    },
    /// `using S = ecs::Signature<C0, C1, T0>;`
    Signature { alias: String, items: Vec<TypeName> },
    /// `using Signatures = ecs::SignatureList<S>;`
    SignatureList { alias: String, signatures: Vec<String> },
    /// `using CFG = ecs::Config<CompTypes, TagTypes, Signatures>;`
    Config {
        alias: String,
        components: &'static str,
        tags: &'static str,
        signatures: String,
    },
    /// `std::cout << "Full Sig : " << CFG::mask<S>() << std::endl;`
    MaskPrint {
        label: &'static str,
        config: String,
        target: MaskTarget,
    },
}

impl Declaration {
    pub fn type_list(kind: TypeListKind, items: &[TypeName]) -> Self {
        Declaration::TypeList {
            kind,
            items: items.to_vec(),
        }
    }

    /// Signature over every component followed by every tag.
    pub fn full_signature(components: &[TypeName], tags: &[TypeName]) -> Self {
        Declaration::Signature {
            alias: SIGNATURE_ALIAS.to_string(),
            items: components.iter().chain(tags).cloned().collect(),
        }
    }

    pub fn singleton_signature_list() -> Self {
        Declaration::SignatureList {
            alias: SIGNATURE_LIST_ALIAS.to_string(),
            signatures: vec![SIGNATURE_ALIAS.to_string()],
        }
    }

    pub fn config() -> Self {
        Declaration::Config {
            alias: CONFIG_ALIAS.to_string(),
            components: TypeListKind::Components.alias(),
            tags: TypeListKind::Tags.alias(),
            signatures: SIGNATURE_LIST_ALIAS.to_string(),
        }
    }

    pub fn mask_print(label: &'static str, target: MaskTarget) -> Self {
        Declaration::MaskPrint {
            label,
            config: CONFIG_ALIAS.to_string(),
            target,
        }
    }

    /// Names of generated types this line references, in order.
    pub fn referenced_types(&self) -> &[TypeName] {
        match self {
            Declaration::TypeList { items, .. } | Declaration::Signature { items, .. } => items,
            _ => &[],
        }
    }
}

fn join<T: AsRef<str>>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<&str>>()
        .join(", ")
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::EmptyType(name) => write!(f, "struct {} {{}};", name),
            Declaration::TypeList { kind, items } => write!(
                f,
                "using {} = {}<{}>;",
                kind.alias(),
                kind.template(),
                join(items.as_slice())
            ),
            Declaration::Signature { alias, items } => write!(
                f,
                "using {} = ecs::Signature<{}>;",
                alias,
                join(items.as_slice())
            ),
            Declaration::SignatureList { alias, signatures } => write!(
                f,
                "using {} = ecs::SignatureList<{}>;",
                alias,
                join(signatures.as_slice())
            ),
            Declaration::Config {
                alias,
                components,
                tags,
                signatures,
            } => write!(
                f,
                "using {} = ecs::Config<{}, {}, {}>;",
                alias, components, tags, signatures
            ),
            Declaration::MaskPrint {
                label,
                config,
                target,
            } => {
                let value = match target {
                    MaskTarget::Type(name) => format!("{}::mask<{}>()", config, name),
                    MaskTarget::Signature(alias) => format!("{}::mask<{}>()", config, alias),
                    MaskTarget::Empty => format!("{}::EMPTY_MASK", config),
                };
                write!(
                    f,
                    "std::cout << \"{}\" << {} << std::endl;",
                    label, value
                )
            }
        }
    }
}
