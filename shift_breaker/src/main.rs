use clap::Parser;
use classical_ciphers::analysis::break_shift_cipher;
use classical_ciphers::LanguageModel;

/// Command-line arguments for the shift cipher breaker.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: String,
}

/// Main entry point for the shift cipher breaker.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read the encrypted content from the input file
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read the input file");

    // Recover the key by correlating letter frequencies against English
    let broken = break_shift_cipher(&content, LanguageModel::english());
    println!("Detected cipher key: {}", broken.key);
    println!("Correlation score: {:.4}", broken.correlation);

    // Write the decrypted text to the output file
    std::fs::write(&cli.output, broken.plaintext)
        .expect("Failed to write the output file");
}
