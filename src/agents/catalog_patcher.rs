use super::VERBOSE_ENV;
use crate::error::{PatchError, Result};
use colored::Colorize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A guarded text insertion: `insertion` is appended after the first `anchor`
/// unless `guard` already appears in the catalog.
#[derive(Debug, Clone, Copy)]
pub struct PatchRule {
    pub name: &'static str,
    pub anchor: &'static str,
    pub guard: &'static str,
    pub insertion: &'static str,
}

/// Rules are applied in this order. The inserted literals are consumed by
/// Gradle's catalog loader and must stay byte-exact.
pub const FIREBASE_RULES: [PatchRule; 3] = [
    PatchRule {
        name: "firebase-libraries",
        anchor: r#"firebase-messaging = { group = "com.google.firebase", name = "firebase-messaging-ktx" }"#,
        guard: r#"firebase-analytics = { group = "com.google.firebase", name = "firebase-analytics-ktx" }"#,
        insertion: concat!(
            "\n",
            r#"firebase-analytics = { group = "com.google.firebase", name = "firebase-analytics-ktx" }"#,
            "\n",
            r#"firebase-crashlytics = { group = "com.google.firebase", name = "firebase-crashlytics-ktx" }"#,
        ),
    },
    PatchRule {
        name: "crashlytics-plugin-version",
        anchor: "# Firebase\nfirebaseBom = \"33.6.0\"",
        guard: "firebaseCrashlyticsPlugin",
        insertion: "\nfirebaseCrashlyticsPlugin = \"2.9.9\"",
    },
    PatchRule {
        name: "crashlytics-plugin",
        anchor: r#"google-services = { id = "com.google.gms.google-services", version = "4.4.2" }"#,
        guard: r#"firebaseCrashlytics = { id = "com.google.firebase.crashlytics""#,
        insertion: concat!(
            "\n",
            r#"firebaseCrashlytics = { id = "com.google.firebase.crashlytics", version.ref = "firebaseCrashlyticsPlugin" }"#,
        ),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleDecision {
    Applied,
    /// The guard text is already in the catalog.
    AlreadyPresent,
    AnchorMissing,
}

impl PatchRule {
    /// Both conditions are checked per rule against the text as it stands.
    pub fn evaluate(&self, text: &str) -> RuleDecision {
        if !text.contains(self.anchor) {
            RuleDecision::AnchorMissing
        } else if text.contains(self.guard) {
            RuleDecision::AlreadyPresent
        } else {
            RuleDecision::Applied
        }
    }

    fn splice(&self, text: &str) -> String {
        let extended = format!("{}{}", self.anchor, self.insertion);
        text.replacen(self.anchor, &extended, 1)
    }
}

#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub text: String,
    pub decisions: Vec<(&'static str, RuleDecision)>,
}

impl PatchOutcome {
    pub fn applied(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.decisions
            .iter()
            .filter(|(_, decision)| *decision == RuleDecision::Applied)
            .map(|(name, _)| *name)
    }

    pub fn changed(&self) -> bool {
        self.applied().next().is_some()
    }
}

/// CatalogPatcher reads the catalog once, applies its rules and writes it back
pub struct CatalogPatcher {
    catalog_path: PathBuf,
    rules: &'static [PatchRule],
}

impl CatalogPatcher {
    pub fn new<P: AsRef<Path>>(catalog_path: P) -> Self {
        Self::with_rules(catalog_path, &FIREBASE_RULES)
    }

    pub fn with_rules<P: AsRef<Path>>(catalog_path: P, rules: &'static [PatchRule]) -> Self {
        Self {
            catalog_path: catalog_path.as_ref().to_path_buf(),
            rules,
        }
    }

    /// Rules match against LF-normalized text; a CRLF catalog gets CRLF back.
    /// When no rule fires the input is returned byte for byte.
    pub fn apply(&self, text: &str) -> PatchOutcome {
        let verbose = std::env::var(VERBOSE_ENV).is_ok();
        let crlf = uses_crlf(text);
        let mut patched = if crlf {
            text.replace("\r\n", "\n")
        } else {
            text.to_string()
        };
        let mut decisions = Vec::with_capacity(self.rules.len());

        for rule in self.rules {
            let decision = rule.evaluate(&patched);
            if decision == RuleDecision::Applied {
                patched = rule.splice(&patched);
            }

            if verbose {
                let detail = match decision {
                    RuleDecision::Applied => describe(decision).green(),
                    RuleDecision::AlreadyPresent => describe(decision).dimmed(),
                    RuleDecision::AnchorMissing => describe(decision).yellow(),
                };
                eprintln!("   [rule] {}: {}", rule.name, detail);
            }

            decisions.push((rule.name, decision));
        }

        let outcome = PatchOutcome {
            text: patched,
            decisions,
        };
        if !outcome.changed() {
            return PatchOutcome {
                text: text.to_string(),
                ..outcome
            };
        }

        if crlf {
            let text = outcome.text.replace('\n', "\r\n");
            return PatchOutcome { text, ..outcome };
        }

        outcome
    }

    /// Reads, patches and (unless `dry_run`) rewrites the catalog.
    ///
    /// The file is rewritten even when no rule fires.
    pub fn patch(&self, dry_run: bool) -> Result<PatchOutcome> {
        let content = self.read_catalog()?;
        let outcome = self.apply(&content);

        if !dry_run {
            self.write_catalog(&outcome.text)?;
        }

        Ok(outcome)
    }

    fn read_catalog(&self) -> Result<String> {
        fs::read_to_string(&self.catalog_path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                PatchError::CatalogNotFound(self.catalog_path.clone())
            } else {
                PatchError::CatalogRead {
                    path: self.catalog_path.clone(),
                    source,
                }
            }
        })
    }

    fn write_catalog(&self, content: &str) -> Result<()> {
        fs::write(&self.catalog_path, content).map_err(|source| PatchError::CatalogWrite {
            path: self.catalog_path.clone(),
            source,
        })
    }
}

/// The first line break decides the file's line ending.
fn uses_crlf(text: &str) -> bool {
    text.find('\n')
        .map(|idx| text[..idx].ends_with('\r'))
        .unwrap_or(false)
}

fn describe(decision: RuleDecision) -> &'static str {
    match decision {
        RuleDecision::Applied => "anchor found, inserting",
        RuleDecision::AlreadyPresent => "already present, skipping",
        RuleDecision::AnchorMissing => "anchor not found, skipping",
    }
}
