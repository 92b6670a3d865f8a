use clap::{Parser, ValueEnum};
use classical_ciphers::normalize::normalize;
use classical_ciphers::{transposition, TranspositionKey};

/// Command-line arguments for the columnar transposition cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Keyword of distinct lowercase letters
    #[arg(short, long, help = "Keyword of distinct lowercase letters")]
    key: String,

    /// Path to the output file where the result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the columnar transposition cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Validate the keyword before touching any files
    let key = TranspositionKey::new(&cli.key).expect("Invalid transposition keyword");

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read the input file");

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with keyword: {}", cli.key);
            // Ciphertext is bare a-z, so readable input is normalized first
            transposition::encrypt(&normalize(&content), &key)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with keyword: {}", cli.key);
            transposition::decrypt(&content, &key)
        }
    };

    // Write result to output file
    std::fs::write(&cli.output, result)
        .expect("Failed to write the output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}
