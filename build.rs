//! Build script to generate embedded word sets
//!
//! Reads the word set files under `data/words` and generates Rust source with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/words/official_wordle_25.txt",
        &Path::new(&out_dir).join("small.rs"),
        "SMALL",
        "Small official Wordle answer sample (25 words), cheap enough for complete trees",
    );

    generate_word_list(
        "data/words/official_wordle_100.txt",
        &Path::new(&out_dir).join("standard.rs"),
        "STANDARD",
        "Standard official Wordle answer sample (100 words) used for self-play",
    );

    println!("cargo:rerun-if-changed=data/words/official_wordle_25.txt");
    println!("cargo:rerun-if-changed=data/words/official_wordle_100.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word set").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
