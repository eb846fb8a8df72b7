use super::EmitOptions;
use crate::Result;
use crate::decl::MetricKind;
use core::fmt::Write;

/// Entries of the generated type enum, in value order.
///
/// The continuation marker is 0 so that a descriptor row which leaves its type out is read
/// as a continuation. Histogram and summary are reserved and never produced.
pub const TYPE_CODES: &[(&str, Option<&str>)] = &[
    ("CONTINUATION", None),
    ("COUNTER", Some("counter")),
    ("GAUGE", Some("gauge")),
    ("HISTOGRAM", Some("histogram")),
    ("SUMMARY", Some("summary")),
];

/// Names of the generated C items, all derived from the configured prefix.
#[derive(Debug)]
pub struct Names {
    lower: String,
    upper: String,
}

impl Names {
    pub fn new(prefix: &str) -> Self {
        Self {
            lower: prefix.to_ascii_lowercase(),
            upper: prefix.to_ascii_uppercase(),
        }
    }

    pub fn type_enum(&self) -> String {
        format!("{}_type", self.lower)
    }

    pub fn type_constant(&self, suffix: &str) -> String {
        format!("{}_TYPE_{suffix}", self.upper)
    }

    pub fn kind_constant(&self, kind: MetricKind) -> String {
        self.type_constant(&kind.keyword().to_ascii_uppercase())
    }

    pub fn id_enum(&self) -> String {
        format!("{}_id", self.lower)
    }

    pub fn id_count(&self) -> String {
        format!("{}_ID_COUNT", self.upper)
    }

    pub fn label_enum(&self) -> String {
        format!("{}_label_id", self.lower)
    }

    pub fn label_count(&self) -> String {
        format!("{}_LABEL_ID_COUNT", self.upper)
    }

    pub fn desc_struct(&self) -> String {
        format!("{}_desc", self.lower)
    }

    pub fn counter_struct(&self) -> String {
        format!("{}_counter", self.lower)
    }

    pub fn set_struct(&self) -> String {
        format!("{}_set", self.lower)
    }

    pub fn set_initializer(&self) -> String {
        format!("{}_SET_INITIALIZER", self.upper)
    }

    pub fn label_entry_struct(&self) -> String {
        format!("{}_label_entry", self.lower)
    }

    pub fn type_names(&self) -> String {
        format!("{}_type_names", self.lower)
    }

    pub fn descs(&self) -> String {
        format!("{}_descs", self.lower)
    }

    pub fn label_tables(&self) -> String {
        format!("{}_label_tables", self.lower)
    }

    /// Lookup array of the label with marker ordinal `marker`.
    pub fn lookup_table(&self, marker: usize) -> String {
        format!("{}_label_values_{marker}", self.lower)
    }

    /// Every upper-case name defined regardless of the declarations.
    pub fn fixed_constants(&self) -> Vec<String> {
        let mut names: Vec<String> = TYPE_CODES.iter().map(|(suffix, _)| self.type_constant(suffix)).collect();
        names.push(self.id_count());
        names.push(self.label_count());
        names.push(self.set_initializer());
        names
    }
}

/// Names the generated code defines in the enumerator and macro namespace no matter what
/// was declared. Declarations must not generate any of them.
#[must_use]
pub fn reserved_names(prefix: &str, include_guard: &str) -> Vec<String> {
    let mut names = Names::new(prefix).fixed_constants();
    names.push(include_guard.to_string());
    names
}

pub fn write_banner<W: Write>(options: &EmitOptions, writer: &mut W) -> Result<()> {
    writeln!(writer, "/* Generated by metricgen from {}. Do not edit. */", options.source_name)?;
    writeln!(writer)?;
    Ok(())
}

/// Render `text` as a C string literal.
pub fn c_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\{:03o}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
