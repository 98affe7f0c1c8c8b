use crudstamp::{Stencil, TemplateKind};
use std::io::Write;
use strum::IntoEnumIterator;

pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    for kind in TemplateKind::iter() {
        let stencil = Stencil::builtin(kind);
        writeln!(
            out,
            "{:<8} <name>.{}  ({} placeholders)",
            kind.as_ref(),
            stencil.extension(),
            stencil.placeholder_count()
        )?;
    }
    Ok(())
}
