//! ECS Config Generator
//!
//! Emits the C++ fragment used by the `ecs::` library's list tests: a fixed
//! number of empty component and tag types, the lists and full signature over
//! them, the `ecs::Config` binding, and three mask prints for eyeballing the
//! resulting bit layout.
//!
//! - [`generator`]: the four generation stages
//! - [`sink`]: the single append-only output sink
//! - [`args`], [`logging`], [`diagnostics`]: CLI plumbing
//!
//! # Example
//!
//! ```
//! use ecs_config_gen::generator::{render_to_string, GeneratorConfig};
//!
//! let fragment = render_to_string(GeneratorConfig { component_count: 1, tag_count: 0 })?;
//! assert!(fragment.starts_with("struct C0 {};\n"));
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod args;
pub mod diagnostics;
pub mod generator;
pub mod logging;
pub mod sink;

pub use generator::{GenerationSummary, Generator, GeneratorConfig};
pub use sink::DeclarationSink;
