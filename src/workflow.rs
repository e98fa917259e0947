use crate::agents::{CatalogPatcher, CatalogVerifier, PatchOutcome, ProjectScannerAgent};
use crate::error::Result;
use colored::Colorize;
use std::path::Path;

/// Execute the catalog patch workflow
pub fn execute_patch<P: AsRef<Path>>(project_path: P, dry_run: bool) -> Result<()> {
    let project_path = project_path.as_ref();
    println!(
        "{}",
        "Patching Gradle version catalog for Firebase...".cyan().bold()
    );

    println!("\n{}", "1. Locating version catalog...".yellow());
    let scanner = ProjectScannerAgent::new(project_path);
    let catalog_path = scanner.locate_catalog()?;
    println!("{}", format!("✓ Found {}", catalog_path.display()).green());

    println!("\n{}", "2. Applying patch rules...".yellow());
    let patcher = CatalogPatcher::new(&catalog_path);
    let outcome = patcher.patch(dry_run)?;
    print_outcome(&outcome);

    println!("\n{}", "3. Verifying version references...".yellow());
    verify(&outcome.text);

    if dry_run {
        println!(
            "\n{}",
            "Dry run: version catalog was not written".cyan().bold()
        );
    } else if outcome.changed() {
        println!(
            "\n{}",
            "✨ Version catalog patched successfully!".green().bold()
        );
    } else {
        println!(
            "\n{}",
            "✨ Version catalog already up to date".green().bold()
        );
    }

    Ok(())
}

fn print_outcome(outcome: &PatchOutcome) {
    let applied: Vec<_> = outcome.applied().collect();
    if applied.is_empty() {
        println!("   {}", "No changes needed".dimmed());
        return;
    }

    for name in applied {
        println!("   {}", format!("✓ {name}").green());
    }
}

/// Problems here are reported, never fatal: the patch itself is text-level.
fn verify(content: &str) {
    let verifier = match CatalogVerifier::parse(content) {
        Ok(verifier) => verifier,
        Err(e) => {
            println!("{}", format!("⚠ Warning: {e}").red());
            return;
        }
    };

    let dangling = verifier.dangling_version_refs();
    if dangling.is_empty() {
        println!("{}", "✓ All version references resolve".green());
        return;
    }

    for entry in dangling {
        println!("{}", format!("⚠ Warning: {entry}").red());
    }
}
