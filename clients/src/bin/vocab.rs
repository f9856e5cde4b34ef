//! `streams-vocab`: summarizes the Activity Streams vocabulary the codec
//! resolves against, optionally exporting it as JSON-LD.
//!
//! **Usage:**
//! ```text
//! streams-vocab [--kind <name>] [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use streams_codec::TypeRegistry;
use streams_vocab::serializer::jsonld;
use streams_vocab::{Role, Shape};

/// Inspect the vocabulary.
#[derive(Parser)]
#[command(name = "streams-vocab", about = "Summarize or export the Activity Streams vocabulary")]
struct Args {
    /// Print the properties of one kind.
    #[arg(long)]
    kind: Option<String>,

    /// Write the vocabulary as JSON-LD to this file.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let registry = TypeRegistry::standard();
    let vocabulary = registry.vocabulary();

    println!(
        "Activity Streams vocabulary v{}: {} modules, {} kinds, {} properties",
        vocabulary.version,
        vocabulary.modules.len(),
        vocabulary.kind_count(),
        vocabulary.property_count()
    );
    for module in &vocabulary.modules {
        println!(
            "  {:<12} {:>3} kinds {:>3} properties  {}",
            module.name,
            module.kinds.len(),
            module.properties.len(),
            module.label
        );
    }
    for role in Role::ALL {
        println!(
            "  role {:<22} {} kinds",
            role.as_str(),
            registry.kinds_with_role(role).count()
        );
    }

    if let Some(name) = &args.kind {
        let schema = registry
            .schema(name)
            .ok_or_else(|| anyhow!("Unknown kind: {name}"))?;
        let roles: Vec<_> = schema.roles().iter().map(|r| r.as_str()).collect();
        println!("\n{} ({})", schema.name(), roles.join(", "));
        for property in schema.properties() {
            let range: Vec<_> = property.range.iter().map(describe).collect();
            println!(
                "  {:<20} {:<14} {}",
                property.name,
                if property.functional { "functional" } else { "sequence" },
                range.join(" | ")
            );
        }
    }

    if let Some(out) = &args.out {
        let json = serde_json::to_string_pretty(&jsonld::to_json_ld(vocabulary))
            .context("Failed to serialize vocabulary to JSON-LD")?;
        fs::write(out, json).with_context(|| format!("Failed to write {}", out.display()))?;
        println!("  Written: {}", out.display());
    }
    Ok(())
}

fn describe(shape: &Shape) -> String {
    match shape {
        Shape::Entity(role) => role.as_str().to_owned(),
        Shape::Reference => "IRI".to_owned(),
        Shape::Literal(kind) => kind.datatype().to_owned(),
    }
}
