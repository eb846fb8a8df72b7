use super::EmitOptions;
use super::common::{Names, TYPE_CODES, c_string, write_banner};
use crate::Result;
use crate::projection::{DescriptorRow, LookupEntry, Tables};
use core::fmt::Write;

/// Write the definitions artifact: the kind names, the descriptor table and the label lookup tables.
pub fn generate<W: Write>(tables: &Tables<'_>, options: &EmitOptions, writer: &mut W) -> Result<()> {
    let names = Names::new(&options.prefix);

    write_banner(options, writer)?;
    writeln!(writer, "#include <stddef.h>")?;
    writeln!(writer)?;
    writeln!(writer, "#include {}", c_string(&options.header_include))?;
    writeln!(writer)?;

    writeln!(writer, "const char *const {}[] = {{", names.type_names())?;
    for (suffix, name) in TYPE_CODES {
        if let Some(name) = name {
            writeln!(writer, "\t[{}] = {},", names.type_constant(suffix), c_string(name))?;
        }
    }
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    write_descriptors(tables, &names, writer)?;
    write_lookups(tables, &names, writer)?;

    Ok(())
}

fn write_descriptors<W: Write>(tables: &Tables<'_>, names: &Names, writer: &mut W) -> Result<()> {
    writeln!(writer, "const struct {} {}[] = {{", names.desc_struct(), names.descs())?;

    for (id, row) in tables.enumeration.identifiers().iter().zip(&tables.descriptors) {
        writeln!(writer, "\t[{}] = {{", id.name())?;
        match row {
            DescriptorRow::Metric { name, kind, help, label } => {
                writeln!(writer, "\t\t.name = {},", c_string(name))?;
                writeln!(writer, "\t\t.type = {},", names.kind_constant(*kind))?;
                if let Some(help) = help {
                    writeln!(writer, "\t\t.help = {},", c_string(help))?;
                }
                if let Some(label) = label {
                    writeln!(writer, "\t\t.label = {},", c_string(label))?;
                }
            }
            DescriptorRow::Continuation { name, label } => {
                writeln!(writer, "\t\t.name = {},", c_string(name))?;
                writeln!(writer, "\t\t.label = {},", c_string(label))?;
            }
            DescriptorRow::End => {}
        }
        writeln!(writer, "\t}},")?;
    }

    writeln!(writer, "\t[{}] = {{ 0 }},", names.id_count())?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    Ok(())
}

fn write_lookups<W: Write>(tables: &Tables<'_>, names: &Names, writer: &mut W) -> Result<()> {
    let identifiers = tables.enumeration.identifiers();

    for table in &tables.lookups {
        let marker = table.marker();
        let array = names.lookup_table(marker.ordinal());

        writeln!(writer, "static const struct {} {array}[] = {{", names.label_entry_struct())?;
        for entry in table.entries() {
            match entry {
                LookupEntry::Value { value, identifier } => {
                    writeln!(writer, "\t{{ {}, {} }},", c_string(value), identifiers[*identifier].name())?;
                }
                LookupEntry::End => writeln!(writer, "\t{{ NULL, 0 }},")?,
            }
        }
        writeln!(writer, "}};")?;
        writeln!(writer)?;
    }

    writeln!(writer, "const struct {} *const {}[] = {{", names.label_entry_struct(), names.label_tables())?;
    for table in &tables.lookups {
        let marker = table.marker();
        writeln!(writer, "\t[{}] = {},", marker.name(), names.lookup_table(marker.ordinal()))?;
    }
    writeln!(writer, "\t[{}] = NULL,", names.label_count())?;
    writeln!(writer, "}};")?;

    Ok(())
}
