//! Build script to generate the embedded native word pool
//!
//! Reads one word list per supported length and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LENGTHS: [usize; 4] = [4, 5, 6, 7];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("native_pool.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in LENGTHS {
        let input_path = format!("data/native/{length}.txt");
        generate_word_list(
            &input_path,
            &mut output,
            &format!("NATIVE_{length}"),
            &format!("Default native pool entries declared as {length}-letter words"),
        );
        println!("cargo:rerun-if-changed={input_path}");
    }

    writeln!(
        output,
        "/// Default native pool as (declared length, raw entries) pairs"
    )
    .unwrap();
    writeln!(
        output,
        "pub const NATIVE_POOL: &[(usize, &[&str])] = &[{}];",
        LENGTHS
            .iter()
            .map(|length| format!("({length}, NATIVE_{length})"))
            .collect::<Vec<_>>()
            .join(", ")
    )
    .unwrap();
}

fn generate_word_list(input_path: &str, output: &mut fs::File, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
