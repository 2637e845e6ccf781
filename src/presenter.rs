use std::io::{self, Write};

use crate::core::record::RecordSet;

/// Pretty printer for the list action and verbose tracing.
pub fn print_record_set(record_set: &RecordSet) {
    render(&mut io::stdout(), record_set).ok();
}

pub fn render<W: Write>(out: &mut W, record_set: &RecordSet) -> io::Result<()> {
    writeln!(out, "ResourceRecordSet")?;
    writeln!(out, "  Name: {}", record_set.name)?;
    writeln!(out, "  Type: {}", record_set.record_type)?;
    if let Some(set_identifier) = &record_set.set_identifier {
        writeln!(out, "  SetIdentifier: {set_identifier}")?;
    }
    if let Some(weight) = record_set.weight {
        writeln!(out, "  Weight: {weight}")?;
    }
    if let Some(ttl) = record_set.ttl {
        writeln!(out, "  TTL: {ttl}")?;
    }
    writeln!(out, "  ResourceRecords:")?;
    for address in &record_set.addresses {
        writeln!(out, "    Value: {address}")?;
    }
    Ok(())
}
