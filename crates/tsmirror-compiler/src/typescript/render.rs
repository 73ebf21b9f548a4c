//! Output rendering methods.

use super::{Emitter, Field, Interface, Method};

impl Emitter<'_> {
    pub(super) fn emit_import(&mut self, name: &str, path: &str) {
        self.output
            .push_str(&format!("import {{ {name} }} from \"{path}\";\n"));
    }

    pub(super) fn emit_interface(&mut self, interface: &Interface) {
        self.emit_docs(&interface.docs, "");

        // Header: [export ]interface Name[ extends A, B] {
        if interface.singleton.is_none() {
            self.output.push_str("export ");
        }
        self.output.push_str(&format!("interface {}", interface.name));
        if !interface.extends.is_empty() {
            self.output
                .push_str(&format!(" extends {}", interface.extends.join(", ")));
        }

        if interface.fields.is_empty() && interface.methods.is_empty() {
            self.output.push_str(" {}\n");
            return;
        }
        self.output.push_str(" {\n");

        for field in &interface.fields {
            self.emit_field(field);
        }
        if !interface.fields.is_empty() && !interface.methods.is_empty() {
            self.output.push('\n');
        }

        for (i, method) in interface.methods.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.emit_method(method);
        }

        self.output.push_str("}\n");
    }

    fn emit_field(&mut self, field: &Field) {
        let indent = &self.config.indent;
        self.output
            .push_str(&format!("{indent}{}: {};\n", field.name, field.ty));
    }

    fn emit_method(&mut self, method: &Method) {
        let indent = self.config.indent.clone();
        self.emit_docs(&method.docs, &indent);

        let params = method
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        self.output.push_str(&format!(
            "{indent}{}({params}): {};\n",
            method.name, method.returns
        ));
    }

    /// Emit `/** ... */` with one ` * ` line per documentation line.
    fn emit_docs(&mut self, docs: &[String], indent: &str) {
        if docs.is_empty() {
            return;
        }
        self.output.push_str(&format!("{indent}/**\n"));
        for line in docs {
            if line.is_empty() {
                self.output.push_str(&format!("{indent} *\n"));
            } else {
                self.output.push_str(&format!("{indent} * {line}\n"));
            }
        }
        self.output.push_str(&format!("{indent} */\n"));
    }

    /// Emit `export const Global: Name = {} as Name;`.
    pub(super) fn emit_singleton(&mut self, global: &str, name: &str) {
        self.output.push_str(&format!(
            "export const {global}: {name} = {{}} as {name};\n"
        ));
    }
}
