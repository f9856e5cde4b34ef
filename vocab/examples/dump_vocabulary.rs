//! Demonstrates loading the standard vocabulary and describing it.
//!
//! Run with: `cargo run --example dump_vocabulary -p streams-vocab`

fn main() {
    let vocabulary = streams_vocab::Vocabulary::full();

    println!("Activity Streams vocabulary v{}", vocabulary.version);
    println!("  Modules:     {}", vocabulary.modules.len());
    println!("  Kinds:       {}", vocabulary.kind_count());
    println!("  Properties:  {}", vocabulary.property_count());
    println!();

    for module in &vocabulary.modules {
        println!(
            "  {:12} {:45} {:>2} kinds, {:>2} properties",
            module.name,
            module.label,
            module.kinds.len(),
            module.properties.len(),
        );
    }

    println!();

    let Some(note) = vocabulary.find_kind("Note") else {
        return;
    };
    println!("Properties of Note:");
    for property in vocabulary.properties_of(note) {
        let cardinality = if property.functional { "functional" } else { "list" };
        println!("  {:20} {:10} {:?}", property.name, cardinality, property.range);
    }
}
