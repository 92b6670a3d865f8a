use clap::{Parser, ValueEnum};
use classical_ciphers::normalize::normalize;
use classical_ciphers::shift;

/// Command-line arguments for the shift cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Shift key for the cipher
    #[arg(short, long, help = "Shift key for the cipher (1-25)")]
    key: u8,

    /// Path to the output file where the result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: Option<String>,

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

/// Main entry point for the shift cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read the input file");

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            // Ciphertext is bare a-z, so readable input is normalized first
            shift::encrypt(&normalize(&content), cli.key)
        }
        OperationMode::Decrypt => shift::decrypt(&content, cli.key),
    };

    // Write to the output file, or print when no file was given
    match cli.output {
        Some(path) => {
            std::fs::write(&path, result).expect("Failed to write the output file");
        }
        None => println!("{}", result),
    }
}
