//! Generate an `ecs::Config` test fragment.
//!
//! The fragment declares `component_count` empty component types and
//! `tag_count` empty tag types, binds them into the component/tag lists, a
//! signature over all of them, a singleton signature list and the config, and
//! finally prints three masks so a log shows whether the config is consistent.
//!
//! Stages run strictly in order and every type is declared before the first
//! aggregate that references it:
//! - name allocation
//! - empty type declarations
//! - list and signature composition
//! - config and mask diagnostics

use anyhow::Result;
use ecs_decl::{
    allocate, Declaration, MaskTarget, NameKind, TypeListKind, TypeName, FULL_SIGNATURE_LABEL,
    SIGNATURE_ALIAS,
};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};

use crate::sink::DeclarationSink;

pub const DEFAULT_COMPONENT_COUNT: usize = 50;
pub const DEFAULT_TAG_COUNT: usize = 14;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorConfig {
    pub component_count: usize,
    pub tag_count: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            component_count: DEFAULT_COMPONENT_COUNT,
            tag_count: DEFAULT_TAG_COUNT,
        }
    }
}

/// Names allocated for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatedNames {
    pub components: Vec<TypeName>,
    pub tags: Vec<TypeName>,
}

/// What a run produced. Logged, never written to the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationSummary {
    pub component_count: usize,
    pub tag_count: usize,
    pub last_component: Option<TypeName>,
    pub last_tag: Option<TypeName>,
    pub signature_arity: usize,
    pub lines: usize,
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    pub fn allocate_names(&self) -> AllocatedNames {
        AllocatedNames {
            components: allocate(NameKind::Component, self.config.component_count),
            tags: allocate(NameKind::Tag, self.config.tag_count),
        }
    }

    /// Write the whole fragment to `sink`.
    pub fn generate<W: Write>(&self, sink: &mut DeclarationSink<W>) -> Result<GenerationSummary> {
        let start = sink.lines_written();
        let names = self.allocate_names();
        debug!(
            components = names.components.len(),
            tags = names.tags.len(),
            "allocated type names"
        );

        emit_type_declarations(&names.components, sink)?;
        sink.emit(&Declaration::type_list(
            TypeListKind::Components,
            &names.components,
        ))?;

        emit_type_declarations(&names.tags, sink)?;
        sink.emit(&Declaration::type_list(TypeListKind::Tags, &names.tags))?;

        let signature = Declaration::full_signature(&names.components, &names.tags);
        let signature_arity = signature.referenced_types().len();
        sink.emit(&signature)?;
        sink.emit(&Declaration::singleton_signature_list())?;
        debug!(signature_arity, "composed lists and signature");

        emit_config_and_diagnostics(&names, sink)?;

        let summary = GenerationSummary {
            component_count: names.components.len(),
            tag_count: names.tags.len(),
            last_component: names.components.last().cloned(),
            last_tag: names.tags.last().cloned(),
            signature_arity,
            lines: sink.lines_written() - start,
        };
        info!(
            components = summary.component_count,
            tags = summary.tag_count,
            lines = summary.lines,
            "generated ecs config fragment"
        );
        Ok(summary)
    }
}

/// One `struct X {};` per name, in order.
pub fn emit_type_declarations<W: Write>(
    names: &[TypeName],
    sink: &mut DeclarationSink<W>,
) -> Result<()> {
    for name in names {
        sink.emit(&Declaration::EmptyType(name.clone()))?;
    }
    Ok(())
}

/// The config binding followed by exactly three mask prints: last component,
/// last tag and the full signature.
pub fn emit_config_and_diagnostics<W: Write>(
    names: &AllocatedNames,
    sink: &mut DeclarationSink<W>,
) -> Result<()> {
    let decls = [
        Declaration::config(),
        Declaration::mask_print(
            TypeListKind::Components.last_label(),
            MaskTarget::last_of(&names.components),
        ),
        Declaration::mask_print(
            TypeListKind::Tags.last_label(),
            MaskTarget::last_of(&names.tags),
        ),
        Declaration::mask_print(
            FULL_SIGNATURE_LABEL,
            MaskTarget::Signature(SIGNATURE_ALIAS.to_string()),
        ),
    ];
    sink.emit_all(&decls)
}

/// Render the fragment for `config` into a string.
pub fn render_to_string(config: GeneratorConfig) -> Result<String> {
    let mut sink = DeclarationSink::new(Vec::new());
    Generator::new(config).generate(&mut sink)?;
    let (buf, _) = sink.finish()?;
    Ok(String::from_utf8(buf)?)
}
