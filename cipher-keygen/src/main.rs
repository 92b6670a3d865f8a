use clap::{Parser, ValueEnum};
use classical_ciphers::keygen;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Key generation for the classical cipher tools.
///
/// Prints a shift key from [1, 25] or a transposition keyword of distinct
/// lowercase letters to standard output. Seeded generation reproduces the
/// same key on every run, which the exercises use to hand out fixed keys.
#[derive(Parser)]
#[command(
    name = "cipher-keygen",
    about = "Random key generation for the classical cipher tools"
)]
struct Args {
    /// Cipher family to generate a key for
    #[arg(short, long, help = "Cipher family (shift/transposition)")]
    cipher: CipherFamily,

    /// Keyword length for transposition keys
    #[arg(short, long, default_value_t = 4, help = "Keyword length for transposition keys (1-26)")]
    length: usize,

    /// Seed for reproducible key generation
    #[arg(short, long, help = "Seed for reproducible generation")]
    seed: Option<u64>,
}

/// Enum representing the cipher family a key is generated for.
#[derive(Clone, Debug, ValueEnum)]
enum CipherFamily {
    /// Shift (Caesar) cipher key
    Shift,
    /// Columnar transposition keyword
    Transposition,
}

fn main() {
    let args = Args::parse();

    // Seeded runs use a deterministic generator, everything else the OS one
    match args.seed {
        Some(seed) => generate(&mut StdRng::seed_from_u64(seed), &args),
        None => generate(&mut thread_rng(), &args),
    }
}

/// Draws and prints one key of the requested family.
fn generate<R: Rng>(rng: &mut R, args: &Args) {
    match args.cipher {
        CipherFamily::Shift => println!("{}", keygen::random_shift_key(rng)),
        CipherFamily::Transposition => {
            let key = keygen::random_transposition_key(rng, args.length)
                .expect("Invalid keyword length");
            println!("{}", key.keyword());
        }
    }
}
