use clap::Parser;
use hamming_sim::channel::{NoiseModel, Noiseless, QuadrupleBitNoise, SingleBitNoise};
use hamming_sim::ecc::{EncodedStream, HammingCode, TrailingPadding};
use hamming_sim::hashing::crc32;
use log::{error, info};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::path::PathBuf;
use std::process::ExitCode;

const SAMPLE_TEXT: &str = "Hamming codes place parity bits at every power-of-two position of a \
codeword. Each parity bit watches the positions whose index has its bit set, so a single \
flipped bit announces its own position through the parities it breaks.\n\
Пример текста в UTF-8: многобайтовые символы тоже должны пережить канал.\n\
Two flips in one codeword are another story: the syndrome either points past the end of the \
codeword, which is detected, or at an innocent bit, which is not.\n";

#[derive(Parser, Debug)]
#[command(
    name = "hamming_demo",
    about = "Sends a message through noisy channels protected by a Hamming code"
)]
struct Args {
    /// Data bits per codeword; 93 gives 100-bit codewords
    #[arg(short, long, default_value_t = 93)]
    mode: usize,

    /// Seed for the noise generator; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of transmissions over the quadruple-bit channel
    #[arg(short, long, default_value_t = 1)]
    trials: usize,

    /// Text file to send instead of the built-in sample
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Trailing padding policy: strip-zeros, keep or fixed:N
    #[arg(long, default_value = "strip-zeros", value_parser = parse_padding)]
    padding: TrailingPadding,
}

fn parse_padding(s: &str) -> Result<TrailingPadding, String> {
    match s {
        "strip-zeros" => Ok(TrailingPadding::StripZeros),
        "keep" => Ok(TrailingPadding::Keep),
        _ => match s.strip_prefix("fixed:") {
            Some(count) => count
                .parse()
                .map(TrailingPadding::Fixed)
                .map_err(|e| format!("invalid byte count {:?}: {}", count, e)),
            None => Err(format!("unknown padding policy {:?}", s)),
        },
    }
}

struct Transmission<'a> {
    code: &'a HammingCode,
    encoded: &'a EncodedStream,
    checksum: u32,
}

impl Transmission<'_> {
    /// Sends the encoded message through `model` and reports what came out.
    fn send(&self, model: &dyn NoiseModel, rng: &mut ChaCha20Rng) -> hamming_sim::Result<bool> {
        let received = model.apply(self.encoded, self.code, rng)?;
        let decoded = self.code.decode(&received)?;

        let checksum = crc32(decoded.message.as_bytes());
        let intact = checksum == self.checksum;

        println!(
            "{:<14} crc32 {:#010x}  intact {:<5}  corrected {:>5}  uncorrectable {:>5}",
            model.name(),
            checksum,
            intact,
            decoded.corrected,
            decoded.uncorrectable
        );

        Ok(intact)
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let message = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE_TEXT.to_string(),
    };

    let code = HammingCode::new(args.mode)?.with_trailing_padding(args.padding);
    let mut rng = match args.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    let checksum = crc32(message.as_bytes());
    let encoded = code.encode_str(&message);

    info!(
        "Message of {} bytes, crc32 {:#010x}",
        message.len(),
        checksum
    );
    info!(
        "Hamming({}, {}): {} codewords, {} encoded bits",
        code.total_bits(),
        code.data_bits(),
        encoded.codeword_count(&code)?,
        encoded.len()
    );

    let transmission = Transmission {
        code: &code,
        encoded: &encoded,
        checksum,
    };

    transmission.send(&Noiseless, &mut rng)?;
    transmission.send(&SingleBitNoise, &mut rng)?;

    let mut intact = 0;
    for _ in 0..args.trials {
        if transmission.send(&QuadrupleBitNoise, &mut rng)? {
            intact += 1;
        }
    }
    if args.trials > 1 {
        info!(
            "{} of {} quadruple-bit transmissions arrived intact",
            intact, args.trials
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
