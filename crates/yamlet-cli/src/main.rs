use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeyArg {
    Identity,
    UppercaseFirst,
}

#[derive(Parser, Debug)]
#[command(name = "yamlet-cli", about = "Convert JSON to yamlet block text", version)]
struct Args {
    /// Render object entries in lexicographic key order
    #[arg(long)]
    sorted_keys: bool,

    /// Escape forward slashes in strings
    #[arg(long)]
    escape_slashes: bool,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 3)]
    indent: usize,

    /// Key transformation applied to object keys
    #[arg(long, value_enum, default_value_t = KeyArg::Identity)]
    keys: KeyArg,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut buf = String::new();
    match &args.input {
        Some(path) => {
            let mut f = File::open(path)?;
            f.read_to_string(&mut buf)?;
        }
        None => {
            stdin().read_to_string(&mut buf)?;
        }
    }

    let options = yamlet::Options {
        sorted_keys: args.sorted_keys,
        escape_slashes: args.escape_slashes,
        indent: args.indent,
        key_strategy: match args.keys {
            KeyArg::Identity => yamlet::KeyStrategy::Identity,
            KeyArg::UppercaseFirst => yamlet::KeyStrategy::UppercaseFirst,
        },
        ..yamlet::Options::default()
    };

    let value: serde_json::Value = serde_json::from_str(&buf)?;
    let out = yamlet::encode_to_string(&value, &options)?;
    println!("{}", out);

    Ok(())
}
