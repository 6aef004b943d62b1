//! The helper method template, rendered once per message with askama.
//!
//! `templates/helpers.go` holds the methods emitted for every message `T`. `Marshal` and
//! `Unmarshal` wrap the `proto` package's wire codec. `Equal` accepts either a `T` or a `*T` and
//! compares structurally with `proto.Equal`; any other type is unequal, and `nil` only equals a
//! nil receiver.

use askama::Template;

use crate::error::{Error, Result};
use crate::ident::is_go_identifier;

/// The values the helper template is rendered with.
#[derive(Template, Clone, Copy, Debug)]
#[template(path = "helpers.go", escape = "none")]
pub struct TemplateContext<'a> {
    /// Go type name of the message.
    pub type_name: &'a str,
}

impl TemplateContext<'_> {
    /// Appends the helper methods for `type_name` to `buf`, preceded by a blank line.
    ///
    /// On error nothing is appended.
    pub fn expand(&self, buf: &mut String) -> Result<()> {
        if !is_go_identifier(self.type_name) {
            return Err(Error::template(format!(
                "{:?} is not a valid Go type name",
                self.type_name
            )));
        }
        let rendered = self
            .render()
            .map_err(|e| Error::template(e.to_string()))?;

        buf.push('\n');
        buf.push_str(rendered.trim_end_matches('\n'));
        buf.push('\n');
        Ok(())
    }
}
