//! GIF Carousel
//!
//! Command line front end for browsing GIF files on mounted storage and
//! streaming them by index, the same path an attached decoder would take.

use std::io::Write;

use gif_carousel::cli;
use gif_carousel::config;
use gif_carousel::storage::{count_gif_files, resolve_name, FsMount, StorageError};
use gif_carousel::stream::{ByteStream, FileSession};

fn main() -> Result<(), StorageError> {
    env_logger::init();

    let matches = cli::parse_flags();
    let config = config::get_config();

    let root = matches.value_of("root").unwrap_or(".");
    let dir = matches.value_of("dir").unwrap_or(&config.gif_directory);

    let mut mount = FsMount::init(root)?;

    match matches.subcommand() {
        ("count", Some(_)) => {
            println!("{}", count_gif_files(&mut mount, dir, false)?);
        }
        ("list", Some(_)) => {
            let count = count_gif_files(&mut mount, dir, false)?;
            for index in 0..count {
                println!("{:3}  {}", index, resolve_name(&mut mount, dir, index)?);
            }
        }
        ("name", Some(cmd)) => {
            let index = parse_index(cmd);
            println!("{}", resolve_name(&mut mount, dir, index)?);
        }
        ("dump", Some(cmd)) => {
            let index = parse_index(cmd);
            let mut session = FileSession::new();
            let name = session.open_by_index(&mut mount, dir, index)?;
            log::info!("streaming {} ({} bytes)", name, session.size());

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let mut buf = vec![0u8; config.chunk_bytes];
            loop {
                let n = session.read_block(&mut buf);
                if n == 0 {
                    break;
                }
                out.write_all(&buf[..n])?;
            }
            out.flush()?;
        }
        _ => println!("No subcommand given. Use --help for details."),
    }

    Ok(())
}

/// Parse the positional INDEX argument, exiting with a usage error when it
/// is not a non-negative integer
fn parse_index(cmd: &clap::ArgMatches) -> usize {
    let raw = cmd.value_of("INDEX").unwrap_or("0");
    match raw.parse() {
        Ok(index) => index,
        Err(_) => {
            eprintln!("invalid index: {}", raw);
            std::process::exit(2);
        }
    }
}
