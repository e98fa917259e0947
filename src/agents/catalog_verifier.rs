use crate::error::{PatchError, Result};
use std::fmt;
use toml_edit::{DocumentMut, Item};

/// An alias whose `version.ref` names a key missing from `[versions]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingVersionRef {
    pub section: &'static str,
    pub alias: String,
    pub version_ref: String,
}

impl fmt::Display for DanglingVersionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} references missing version '{}'",
            self.section, self.alias, self.version_ref
        )
    }
}

/// Read-only checks over the patched catalog text.
pub struct CatalogVerifier {
    doc: DocumentMut,
}

impl CatalogVerifier {
    pub fn parse(content: &str) -> Result<Self> {
        let doc = content.parse::<DocumentMut>().map_err(|e| {
            PatchError::TomlParsing(format!("Patched catalog is not valid TOML: {e}"))
        })?;
        Ok(Self { doc })
    }

    pub fn dangling_version_refs(&self) -> Vec<DanglingVersionRef> {
        let versions = self.doc.get("versions").and_then(Item::as_table);
        let mut dangling = Vec::new();

        for section in ["libraries", "plugins"] {
            let Some(table) = self.doc.get(section).and_then(Item::as_table) else {
                continue;
            };

            for (alias, item) in table.iter() {
                let Some(version_ref) = extract_version_ref(item) else {
                    continue;
                };

                let defined = versions
                    .map(|v| v.contains_key(&version_ref))
                    .unwrap_or(false);
                if !defined {
                    dangling.push(DanglingVersionRef {
                        section,
                        alias: alias.to_string(),
                        version_ref,
                    });
                }
            }
        }

        dangling
    }
}

/// Handles `version.ref = "x"`, `version = { ref = "x" }` and `[libraries.foo.version]`.
fn extract_version_ref(item: &Item) -> Option<String> {
    if let Some(inline) = item.as_inline_table() {
        return inline
            .get("version")
            .and_then(|v| v.as_inline_table())
            .and_then(|version| version.get("ref"))
            .and_then(|v| v.as_str())
            .map(str::to_string);
    }

    let version = item.as_table()?.get("version")?;
    if let Some(table) = version.as_table() {
        return table.get("ref").and_then(|v| v.as_str()).map(str::to_string);
    }

    version
        .as_inline_table()
        .and_then(|inline| inline.get("ref"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
