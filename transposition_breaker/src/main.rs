use clap::Parser;
use classical_ciphers::analysis::{break_transposition_cipher, DigraphScorer};
use classical_ciphers::LanguageModel;

/// Command-line arguments for the transposition breaker program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,

    /// Assumed keyword length for the permutation search
    #[arg(short, long, default_value_t = 4, help = "Keyword length to search (1-26)")]
    key_length: usize,
}

/// Main entry point for the transposition breaker.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read the encrypted content from the input file
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read the input file");

    // Digraph statistics get thin on short ciphertexts
    if content.chars().filter(|c| c.is_ascii_lowercase()).count() < 50 {
        eprintln!("Warning: Text may be too short for reliable analysis");
    }

    // Score every column permutation against English digraph frequencies
    let scorer = DigraphScorer::new(LanguageModel::english());
    let broken = break_transposition_cipher(&content, cli.key_length, &scorer)
        .expect("Invalid keyword length");

    println!("Best column order: {:?}", broken.column_order);
    println!("Digraph score: {:.4}", broken.score);

    // Write the decrypted text to the output file
    std::fs::write(&cli.output, broken.plaintext)
        .expect("Failed to write the output file");
}
