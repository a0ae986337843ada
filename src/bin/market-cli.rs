//! # market-cli.rs
//!
//! Ein Kommandozeilen-Tool für den off-chain Teil des Marktplatzes:
//! Schlüsselverwaltung und das Erstellen und Prüfen von Mint-Vouchern.
//!
//! ## Befehle:
//! - `generate-keys`: Erzeugt ein neues Schlüsselpaar für einen Autorisierer.
//! - `create-voucher`: Signiert einen Mint-Voucher mit einem privaten Schlüssel.
//! - `verify-voucher`: Prüft einen Voucher gegen einen erwarteten Autorisierer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ed25519_dalek::SigningKey;
use market_lib::services::signer::create_signed_voucher;
use market_lib::services::verifier::verify_voucher;
use market_lib::{codec, crypto_utils, U256};
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Das Haupt-Struct für das CLI-Tool, das von `clap` geparst wird.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Definiert die verfügbaren Unterbefehle.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Erzeugt ein neues Ed25519-Schlüsselpaar für einen Collection-Autorisierer.
    GenerateKeys,

    /// Erstellt und signiert einen Mint-Voucher.
    CreateVoucher {
        /// Pfad zur privaten Schlüsseldatei des Autorisierers (z.B. target/dev-keys/authorizer.key).
        #[arg(short, long)]
        key: PathBuf,

        /// Die Asset-ID, die der Voucher autorisiert (Dezimal-String).
        #[arg(long)]
        asset_id: String,

        /// Die Metadaten-URI des Assets (z.B. eine ipfs://-URI).
        #[arg(long)]
        metadata_uri: String,

        /// Der Mindestpreis in der Anzeige-Denomination (z.B. "1.5").
        #[arg(long)]
        min_price: String,
    },

    /// Prüft einen Voucher gegen den erwarteten Autorisierer.
    VerifyVoucher {
        /// Die did:key-Identität des erwarteten Autorisierers.
        #[arg(short, long)]
        authorizer: String,

        /// Pfad zur JSON-Datei des Vouchers.
        voucher_file: PathBuf,
    },
}

/// Hauptfunktion des Programms.
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenerateKeys => generate_keys()?,
        Commands::CreateVoucher {
            key,
            asset_id,
            metadata_uri,
            min_price,
        } => create_voucher(&key, &asset_id, &metadata_uri, &min_price)?,
        Commands::VerifyVoucher {
            authorizer,
            voucher_file,
        } => verify_voucher_file(&authorizer, &voucher_file)?,
    }

    Ok(())
}

/// Logik für den `generate-keys`-Befehl.
fn generate_keys() -> Result<()> {
    let key_dir = Path::new("target/dev-keys");
    fs::create_dir_all(key_dir)
        .with_context(|| format!("Konnte das Verzeichnis {} nicht erstellen", key_dir.display()))?;

    let key_path = key_dir.join("authorizer.key");

    println!("🔑 Erzeuge neues Schlüsselpaar...");

    let (public_key, signing_key) = crypto_utils::generate_ed25519_keypair();
    fs::write(&key_path, signing_key.to_bytes())
        .with_context(|| format!("Konnte privaten Schlüssel nicht in {} schreiben", key_path.display()))?;

    let identity = crypto_utils::create_identity(&public_key);

    println!("✅ Schlüssel erfolgreich generiert!");
    println!("   - Privater Schlüssel gespeichert in: {}", key_path.display());
    println!("   - Ihre Autorisierer-Identität (did:key) lautet: {}", identity);

    Ok(())
}

/// Lädt einen privaten Ed25519-Schlüssel aus einer Datei.
fn load_signing_key(key_path: &Path) -> Result<SigningKey> {
    let key_bytes: [u8; 32] = fs::read(key_path)
        .with_context(|| format!("Konnte privaten Schlüssel aus {} nicht laden", key_path.display()))?
        .try_into()
        .map_err(|_| anyhow::anyhow!("Schlüsseldatei hat eine ungültige Länge"))?;
    Ok(SigningKey::from_bytes(&key_bytes))
}

/// Logik für den `create-voucher`-Befehl.
fn create_voucher(
    key_path: &Path,
    asset_id_str: &str,
    metadata_uri: &str,
    min_price_str: &str,
) -> Result<()> {
    let signing_key = load_signing_key(key_path)?;

    let asset_id = U256::from_dec_str(asset_id_str)
        .map_err(|e| anyhow::anyhow!("Ungültige Asset-ID '{}': {:?}", asset_id_str, e))?;
    let min_price = Decimal::from_str(min_price_str)
        .with_context(|| format!("Ungültiger Mindestpreis '{}'", min_price_str))?;

    let voucher = create_signed_voucher(asset_id, metadata_uri, &min_price, &signing_key)?;
    let voucher_json = codec::voucher_to_json(&voucher)?;

    let identity = crypto_utils::create_identity(&signing_key.verifying_key());

    println!("✍️  Voucher signiert von: {}", identity);
    println!("{}", voucher_json);

    Ok(())
}

/// Logik für den `verify-voucher`-Befehl.
fn verify_voucher_file(authorizer: &str, voucher_path: &Path) -> Result<()> {
    let voucher_json = fs::read_to_string(voucher_path)
        .with_context(|| format!("Konnte Voucher-Datei {} nicht laden", voucher_path.display()))?;
    let voucher = codec::voucher_from_json(&voucher_json)?;

    if verify_voucher(&voucher, authorizer) {
        println!("✅ Voucher ist gültig und vom erwarteten Autorisierer signiert.");
        Ok(())
    } else {
        anyhow::bail!("Voucher-Signatur ist ungültig oder stammt nicht vom erwarteten Autorisierer.")
    }
}
