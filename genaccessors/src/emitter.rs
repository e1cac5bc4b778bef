//! Rendering of the `GenAccessors` Elm module.

use std::fmt::Write;
use std::io;

use crate::errors::EmitError;

/// Preamble emitted once, before any entry.
pub const HEADER: &str = "module GenAccessors exposing(..)\n\nimport Accessors\n\n";

/// Render the accessor declaration for one field, followed by a blank line.
pub fn render_entry(name: &str) -> String {
    let mut entry = String::new();
    push_entry(&mut entry, name);
    entry
}

/// Render the whole module for `names`, in order.
pub fn emit<N: AsRef<str>>(names: &[N]) -> String {
    let mut module = String::from(HEADER);
    for name in names {
        push_entry(&mut module, name.as_ref());
    }
    module
}

/// Stream the module to `sink`, one entry at a time.
///
/// Produces the same bytes as [`emit`].
pub fn write_module<W, N>(sink: &mut W, names: &[N]) -> Result<(), EmitError>
where
    W: io::Write + ?Sized,
    N: AsRef<str>,
{
    sink.write_all(HEADER.as_bytes())?;
    for name in names {
        sink.write_all(render_entry(name.as_ref()).as_bytes())?;
    }
    sink.flush()?;
    Ok(())
}

fn push_entry(buffer: &mut String, name: &str) {
    let _ = writeln!(
        buffer,
        r"{name} = Accessors.makeOneToOne .{name} (\c r -> {{ r | {name} = c r.{name} }})"
    );
    buffer.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_entry() {
        assert_eq!(
            render_entry("title"),
            "title = Accessors.makeOneToOne .title (\\c r -> { r | title = c r.title })\n\n"
        );
    }

    #[test]
    fn test_emit_empty_is_header_only() {
        let names: [&str; 0] = [];
        assert_eq!(emit(&names), HEADER);
    }

    #[test]
    fn test_emit_does_not_validate() {
        let output = emit(&["has space"]);
        assert!(output.contains("has space = Accessors.makeOneToOne .has space"));
    }

    #[test]
    fn test_write_module_matches_emit() {
        let names = ["newJob", "title"];
        let mut sink = Vec::new();
        write_module(&mut sink, &names).unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), emit(&names));
    }
}
