use crate::error::Result;
use crate::types::Record;
use std::io::Write;

/// Presentation boundary.
///
/// The core has no dependency on any UI toolkit; hosts mutate the
/// filter state, re-run the engine and hand the matches to a presenter.
pub trait Presenter {
    fn render(&mut self, records: &[&Record]) -> Result<()>;
}

/// One JSON object per record, one record per line
pub struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Presenter for JsonLines<W> {
    fn render(&mut self, records: &[&Record]) -> Result<()> {
        for record in records {
            let json = serde_json::to_string(record)?;
            writeln!(self.out, "{}", json)?;
        }
        Ok(())
    }
}

/// Human-readable card per record: headline, facet lines, description,
/// law excerpt and link
pub struct TextCards<W: Write> {
    out: W,
}

impl<W: Write> TextCards<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn joined(record: &Record, field: &str) -> String {
        record
            .facet(field)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<W: Write> Presenter for TextCards<W> {
    fn render(&mut self, records: &[&Record]) -> Result<()> {
        for record in records {
            writeln!(
                self.out,
                "#{} {}",
                record.id,
                record.field("Tipo de documento").unwrap_or("")
            )?;
            writeln!(self.out, "aspectos: {}", Self::joined(record, "Aspectos"))?;
            writeln!(self.out, "elementos: {}", Self::joined(record, "Elementos"))?;
            writeln!(
                self.out,
                "esfera: {}",
                Self::joined(record, "Esfera de Governo")
            )?;
            writeln!(self.out, "local: {}", Self::joined(record, "Local"))?;
            writeln!(self.out, "ano: {}", Self::joined(record, "Ano"))?;
            if let Some(tipo) = record.field("Tipo de Legislação") {
                writeln!(self.out, "tipo: {}", tipo)?;
            }
            if let Some(descricao) = record.field("Descrição") {
                writeln!(self.out, "{}", descricao)?;
            }
            if let Some(trecho) = record.field("Trecho da Lei") {
                writeln!(self.out, "{}", trecho)?;
            }
            if let Some(link) = record.field("Link") {
                writeln!(self.out, "saiba mais: {}", link)?;
            }
            writeln!(self.out)?;
        }
        Ok(())
    }
}
