use super::EmitOptions;
use super::common::{Names, TYPE_CODES, write_banner};
use crate::Result;
use crate::projection::Tables;
use core::fmt::Write;

/// Write the declarations artifact: enumerations, record shapes and `extern` table declarations.
pub fn generate<W: Write>(tables: &Tables<'_>, options: &EmitOptions, writer: &mut W) -> Result<()> {
    let names = Names::new(&options.prefix);
    let guard = &options.include_guard;

    write_banner(options, writer)?;
    writeln!(writer, "#ifndef {guard}")?;
    writeln!(writer, "#define {guard}")?;
    writeln!(writer)?;
    writeln!(writer, "#include <stdint.h>")?;
    writeln!(writer, "#include <time.h>")?;
    writeln!(writer)?;

    writeln!(writer, "enum {} {{", names.type_enum())?;
    for (value, (suffix, _)) in TYPE_CODES.iter().enumerate() {
        writeln!(writer, "\t{} = {value},", names.type_constant(suffix))?;
    }
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    writeln!(writer, "enum {} {{", names.id_enum())?;
    for id in tables.enumeration.identifiers() {
        writeln!(writer, "\t{} = {},", id.name(), id.ordinal())?;
    }
    writeln!(writer, "\t{} = {},", names.id_count(), tables.enumeration.identifier_count())?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    writeln!(writer, "enum {} {{", names.label_enum())?;
    for marker in tables.enumeration.markers() {
        writeln!(writer, "\t{} = {},", marker.name(), marker.ordinal())?;
    }
    writeln!(writer, "\t{} = {},", names.label_count(), tables.enumeration.marker_count())?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    writeln!(writer, "struct {} {{", names.desc_struct())?;
    writeln!(writer, "\tconst char *name;")?;
    writeln!(writer, "\tenum {} type;", names.type_enum())?;
    writeln!(writer, "\tconst char *help;")?;
    writeln!(writer, "\tconst char *label;")?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    writeln!(writer, "struct {} {{", names.counter_struct())?;
    writeln!(writer, "\tuint64_t value;")?;
    writeln!(writer, "\ttime_t updated;")?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    writeln!(writer, "struct {} {{", names.set_struct())?;
    writeln!(writer, "\tconst char *ident;")?;
    writeln!(writer, "\tstruct {} counters[{}];", names.counter_struct(), names.id_count())?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;
    writeln!(writer, "#define {} {{ 0 }}", names.set_initializer())?;
    writeln!(writer)?;

    writeln!(writer, "struct {} {{", names.label_entry_struct())?;
    writeln!(writer, "\tconst char *value;")?;
    writeln!(writer, "\tenum {} id;", names.id_enum())?;
    writeln!(writer, "}};")?;
    writeln!(writer)?;

    writeln!(writer, "extern const char *const {}[];", names.type_names())?;
    writeln!(writer, "extern const struct {} {}[];", names.desc_struct(), names.descs())?;
    writeln!(writer, "extern const struct {} *const {}[];", names.label_entry_struct(), names.label_tables())?;
    writeln!(writer)?;
    writeln!(writer, "#endif /* {guard} */")?;

    Ok(())
}
