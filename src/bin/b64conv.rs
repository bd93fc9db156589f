use std::io::{self, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use b64conv::Variant;
use b64conv::common::io::{read_file, read_stdin};
use b64conv::common::{TOOL_NAME, error_msg, is_broken_pipe, reset_sigpipe};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "b64conv",
    about = "Encode FILE, or standard input, to base64 symbols; or decode them back.",
    after_help = "With no FILE, or when FILE is -, read standard input.\n\n\
        Encoding uses the standard alphabet (+ /) padded with '=' unless\n\
        --url-safe selects the URL-safe alphabet (- _) without padding.\n\
        Decoding accepts either alphabet, optional padding, and tabs, spaces\n\
        and line breaks anywhere in the input.",
    version
)]
struct Cli {
    /// Decode data
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// Encode with the URL-safe alphabet and no padding
    #[arg(short = 'u', long = "url-safe")]
    url_safe: bool,

    /// File to process (reads stdin if omitted or -)
    file: Option<String>,
}

impl Cli {
    fn variant(&self) -> Variant {
        if self.url_safe {
            Variant::UrlSafe
        } else {
            Variant::Standard
        }
    }
}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        if is_broken_pipe(&e) {
            process::exit(0);
        }
        eprintln!("{}: {}", TOOL_NAME, error_msg(&e));
        process::exit(1);
    }
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let filename = cli.file.as_deref().unwrap_or("-");

    let output = if filename == "-" {
        let data = read_stdin().context("standard input")?;
        transcode(cli, &data)?
    } else {
        let data = read_file(Path::new(filename)).with_context(|| filename.to_string())?;
        transcode(cli, &data).with_context(|| filename.to_string())?
    };

    out.write_all(&output)?;
    out.flush()?;
    Ok(())
}

/// Decode is variant-agnostic; `--url-safe` only affects encoding.
fn transcode(cli: &Cli, data: &[u8]) -> Result<Vec<u8>> {
    if cli.decode {
        return Ok(b64conv::decode(data)?);
    }
    let mut encoded = b64conv::encode(data, cli.variant());
    encoded.push(b'\n');
    Ok(encoded)
}
