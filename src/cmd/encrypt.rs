use super::TextSource;
use clap::Args;
use cribforge::error::CfResult;
use cribforge::key::SubstitutionKey;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    #[command(flatten)]
    pub source: TextSource,

    /// 26-letter cipher alphabet; position i enciphers the i-th plain letter.
    #[arg(short, long, conflicts_with = "seed")]
    pub key: Option<String>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

pub fn run(args: &EncryptArgs) -> CfResult<()> {
    let plain = args.source.read()?;

    let key = match &args.key {
        Some(alphabet) => SubstitutionKey::from_cipher_alphabet(alphabet)?,
        None => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            SubstitutionKey::random(&mut rng)
        }
    };

    info!("🔑 Key: ABCDEFGHIJKLMNOPQRSTUVWXYZ -> {}", key);
    print!("{}", key.encipher(&plain));
    if !plain.ends_with('\n') {
        println!();
    }
    Ok(())
}
