use super::{summary, Expand};

use tablesmith_core::SourceWriter;

impl Expand<'_> {
    pub(crate) fn expand_interface(&self) -> String {
        let mut w = SourceWriter::new();

        self.preamble(&mut w, &["System"]);

        summary(&mut w, &format!("Columns of {}", self.names.qualified));
        w.block(format!("public interface {}", self.names.interface_name), |w| {
            for (column, names) in &self.columns {
                w.line(format!(
                    "{} {} {{ get; set; }}",
                    self.property_type(column),
                    names.property
                ));
            }

            if self.options.dirty_flag {
                w.line("bool IsDirty { get; set; }");
            }
        });

        w.close();
        w.finish()
    }
}
