//! Command line argument definitions

use clap;

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    clap::App::new("gif-carousel")
        .version(clap::crate_version!())
        .about("Browse and stream GIF files by index from mounted storage")
        .arg(
            clap::Arg::from_usage("-r, --root [root] 'Mount point of the storage device (default: .)'")
                .global(true),
        )
        .arg(
            clap::Arg::from_usage("-d, --dir [dir] 'Directory holding the GIF files (default: from config)'")
                .global(true),
        )
        .subcommand(
            clap::SubCommand::with_name("count")
                .about("Print the number of GIF files in the directory"),
        )
        .subcommand(
            clap::SubCommand::with_name("list")
                .about("List GIF files with their indexes, in traversal order"),
        )
        .subcommand(
            clap::SubCommand::with_name("name")
                .about("Resolve an index to its filename")
                .arg(clap::Arg::from_usage("<INDEX> 'Zero-based GIF index'")),
        )
        .subcommand(
            clap::SubCommand::with_name("dump")
                .about("Stream the GIF at the given index to stdout")
                .arg(clap::Arg::from_usage("<INDEX> 'Zero-based GIF index'")),
        )
        .get_matches()
}
