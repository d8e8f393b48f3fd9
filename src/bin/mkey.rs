/// mkey – Nintendo parental control master key calculator.
///
///   mkey SERIAL MONTH DAY   → print the 5-digit reset code
///   mkey -c STRING          → print the raw CRC32 of STRING
///   mkey -cx STRING         → same, in hex
use std::env;
use std::process::{self, ExitCode};

use mkey::crc32;
use mkey::masterkey::MasterKey;

fn usage() {
    eprintln!("mkey - parental control master key calculator");
    eprintln!();
    eprintln!("Usage: mkey [OPTIONS] SERIAL MONTH DAY");
    eprintln!("       mkey [OPTIONS] -c STRING");
    eprintln!();
    eprintln!("SERIAL is the 8-digit serial (or confirmation) number shown by the");
    eprintln!("console; MONTH and DAY are the date it displays, two digits each.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --crc          Checksum mode: print the CRC32 of STRING");
    eprintln!("  -x, --hex          Print values in hexadecimal");
    eprintln!("  -v, --verbose      Show the digest string on stderr");
    eprintln!("  -h, --help         Show this help");
}

#[derive(Debug)]
struct Opts {
    crc_mode: bool,
    hex: bool,
    verbose: bool,
    args: Vec<String>,
}

fn parse_args() -> Opts {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut opts = Opts {
        crc_mode: false,
        hex: false,
        verbose: false,
        args: Vec::new(),
    };

    for arg in args {
        match arg.as_str() {
            "-c" | "--crc" => opts.crc_mode = true,
            "-x" | "--hex" => opts.hex = true,
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => {
                usage();
                process::exit(0);
            }
            // Handle combined short flags like -cx, -cv, etc.
            s if s.starts_with('-') && !s.starts_with("--") && s.len() > 2 => {
                for ch in s[1..].chars() {
                    match ch {
                        'c' => opts.crc_mode = true,
                        'x' => opts.hex = true,
                        'v' => opts.verbose = true,
                        _ => {
                            eprintln!("mkey: unknown flag '-{ch}'");
                            process::exit(1);
                        }
                    }
                }
            }
            s if s.starts_with("--") => {
                eprintln!("mkey: unknown option '{s}'");
                process::exit(1);
            }
            _ => opts.args.push(arg),
        }
    }

    opts
}

fn print_value(value: u32, hex: bool) {
    if hex {
        println!("{value:08X}");
    } else {
        println!("{value}");
    }
}

fn run_crc(opts: &Opts) -> Result<(), String> {
    if opts.args.len() != 1 {
        return Err("checksum mode takes exactly one STRING argument".to_string());
    }
    let text = &opts.args[0];
    let crc = crc32::crc32_str(text).map_err(|e| format!("{text}: {e}"))?;
    print_value(crc, opts.hex);
    Ok(())
}

fn run_masterkey(opts: &Opts) -> Result<(), String> {
    if opts.args.len() != 3 {
        return Err("expected SERIAL MONTH DAY (see -h)".to_string());
    }
    let (serial, month, day) = (&opts.args[0], &opts.args[1], &opts.args[2]);
    let mk = MasterKey::new(serial, month, day).map_err(|e| format!("{e}"))?;
    if opts.verbose {
        eprintln!("mkey: digest {}{}", mk.date(), &mk.serial()[4..8]);
    }
    if opts.hex {
        println!("{:X}", mk.key());
    } else {
        // Reset codes are entered as 5 digits, leading zeros included.
        println!("{:05}", mk.key());
    }
    Ok(())
}

fn run() -> Result<(), ()> {
    let opts = parse_args();

    if opts.args.is_empty() {
        usage();
        return Err(());
    }

    let result = if opts.crc_mode {
        run_crc(&opts)
    } else {
        run_masterkey(&opts)
    };

    if let Err(e) = result {
        eprintln!("mkey: {e}");
        return Err(());
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}
