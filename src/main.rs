use anyhow::{bail, Result};
use bmpstego::{rainbow, Raster};
use clap::{CommandFactory, Parser};
use std::{io, path::PathBuf, process, time::Duration};

const LOGO: &str = r"
  ____  _ _                            ____  _
 | __ )(_) |_ _ __ ___   __ _ _ __   / ___|| |_ ___  __ _  ___
 |  _ \| | __| '_ ` _ \ / _` | '_ \  \___ \| __/ _ \/ _` |/ _ \
 | |_) | | |_| | | | | | (_| | |_) |  ___) | ||  __/ (_| | (_) |
 |____/|_|\__|_| |_| |_|\__,_| .__/  |____/ \__\___|\__, |\___/
                             |_|                    |___/
";

/// Hides files in bitmaps, one byte per pixel in the red channel, and converts such
/// bitmaps back to hex text.
#[derive(Parser, Debug)]
#[command(name = "bmpstego", version, about, before_help = LOGO)]
struct Cli {
    /// Generate a bitmap from the file given by -f and save it to -o
    #[arg(short, long)]
    generate: bool,

    /// Convert the bitmap given by -f into raw bytes in text form saved to -o
    #[arg(short, long)]
    convert: bool,

    /// Input file: the payload to generate from or the bitmap to convert
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output file: the bitmap (.bmp or .png) or the hex text file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Because what is a console application without rainbow colours?
    #[arg(short, long)]
    psychedelic: bool,

    /// Pause between characters printed in psychedelic mode, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = rainbow::DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("An error occurred: {err}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.generate && !cli.convert {
        Cli::command().print_help()?;
        return Ok(());
    }

    let (Some(file), Some(output)) = (&cli.file, &cli.output) else {
        bail!("-g and -c require both an input file (-f) and an output file (-o)");
    };

    if cli.generate {
        let raster = Raster::encode_file(file, output)?;
        println!("Bitmap successfully generated and saved.");
        println!("  {}x{} pixels", raster.width, raster.height);
    }

    if cli.convert {
        let decoded = Raster::decode_file(file, output)?;
        println!(
            "Bitmap successfully converted to text format at location: {}",
            output.display()
        );

        if cli.psychedelic {
            println!("You are in psychedelic mode, hit Enter to continue. Use CTRL+C to exit the program.");
            io::stdin().read_line(&mut String::new())?;

            let mut stdout = io::stdout().lock();
            rainbow::print_rainbow(&mut stdout, &decoded.hex, Duration::from_millis(cli.delay_ms))?;
        }
    }

    Ok(())
}
