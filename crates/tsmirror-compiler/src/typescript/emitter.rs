//! Core emitter struct and main emit logic.

use super::{Config, Module};

/// TypeScript emitter for one resolved module.
pub struct Emitter<'a> {
    pub(super) config: &'a Config,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Emit imports, interfaces and singleton constants, in that order.
    pub fn emit(mut self, module: &Module) -> String {
        for import in &module.imports {
            self.emit_import(&import.name, &import.path);
        }
        if !module.imports.is_empty() {
            self.output.push('\n');
        }

        for interface in &module.interfaces {
            self.emit_interface(interface);
            self.output.push('\n');
        }

        for interface in &module.interfaces {
            if let Some(global) = &interface.singleton {
                self.emit_singleton(global, &interface.name);
            }
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        self.output.push('\n');
        self.output
    }
}
