//! Example generating tree factory methods from a node catalogue.
//!
//! Run with: `cargo run --example generate [catalogue.xml] [java|rust]`
//!
//! Without a catalogue path, a small built-in catalogue is used.

use treegen::prelude::*;

const DEMO_CATALOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<catalogue>
    <node name="Ident">
        <field name="sym" type="Symbol"/>
    </node>
    <node name="Select">
        <field name="qualifier" type="Tree"/>
        <field name="selector" type="Name"/>
    </node>
    <node name="Apply">
        <field name="fun" type="Tree"/>
        <field name="args" type="Tree[]"/>
    </node>
    <node name="Empty"/>
</catalogue>"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let xml = match args.next() {
        Some(path) => std::fs::read_to_string(path)?,
        None => DEMO_CATALOGUE.to_string(),
    };
    let syntax = match args.next().as_deref() {
        Some("rust") => Syntax::rust(),
        _ => Syntax::java(),
    };

    let catalogue = parse_catalogue(&xml)?;
    let emission = Generator::new(&catalogue).syntax(syntax).expand()?;

    print!("{}", emission);
    Ok(())
}
