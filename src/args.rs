use clap::{ArgAction, Parser};

use crate::generator::{GeneratorConfig, DEFAULT_COMPONENT_COUNT, DEFAULT_TAG_COUNT};

#[derive(Debug, Parser)]
#[command(
    name = "ecs-config-gen",
    author,
    version,
    about = "Print an ecs::Config test fragment with N components and M tags",
    long_about = "Print a C++ fragment declaring N empty component types and M empty tag types, \
                  the lists and full signature over them, the ecs::Config binding them, and \
                  three mask prints (last component, last tag, full signature).\n\n\
                  The fragment goes to stdout; redirect it wherever it is needed."
)]
pub struct Args {
    /// Number of component types to declare (C0..C{N-1}).
    #[arg(value_name = "COMPONENTS", default_value_t = DEFAULT_COMPONENT_COUNT)]
    pub component_count: usize,

    /// Number of tag types to declare (T0..T{M-1}).
    #[arg(value_name = "TAGS", default_value_t = DEFAULT_TAG_COUNT)]
    pub tag_count: usize,

    /// Log progress to stderr (-v info, -vv debug, -vvv every emitted line).
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,

    /// Emit a structured JSON diagnostic on stderr when generation fails.
    #[arg(long, default_value_t = false)]
    pub debug_json: bool,
}

impl Args {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            component_count: self.component_count,
            tag_count: self.tag_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["ecs-config-gen"]).unwrap();
        assert_eq!(args.generator_config(), GeneratorConfig::default());
        assert_eq!(args.verbose, 0);
        assert!(!args.debug_json);
    }

    #[test]
    fn test_positional_counts() {
        let args = Args::try_parse_from(["ecs-config-gen", "2", "1", "-vv"]).unwrap();
        assert_eq!(
            args.generator_config(),
            GeneratorConfig {
                component_count: 2,
                tag_count: 1,
            }
        );
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_component_count_only() {
        let args = Args::try_parse_from(["ecs-config-gen", "7"]).unwrap();
        assert_eq!(args.component_count, 7);
        assert_eq!(args.tag_count, DEFAULT_TAG_COUNT);
    }

    #[test]
    fn test_rejects_negative_and_non_numeric_counts() {
        assert!(Args::try_parse_from(["ecs-config-gen", "--", "-1"]).is_err());
        assert!(Args::try_parse_from(["ecs-config-gen", "five"]).is_err());
        assert!(Args::try_parse_from(["ecs-config-gen", "1", "2", "3"]).is_err());
    }
}
