//! Layer composition helpers for configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::RmbsDeskConfig;

/// Source a configuration layer pretends to come from.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `(source, value)` layers in order into a [`RmbsDeskConfig`].
pub fn merge(layers: &[(Source, Value)]) -> RmbsDeskConfig {
    let mut composer = MergeComposer::new();
    for (source, value) in layers.iter().cloned() {
        match source {
            Source::Defaults => composer.push_defaults(value),
            Source::File => composer.push_file(value, None),
            Source::Environment => composer.push_environment(value),
            Source::Cli => composer.push_cli(value),
        }
    }

    RmbsDeskConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}
