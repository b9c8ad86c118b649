use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, Read};

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use log::{debug, info};
use nbtree::filter::NbtFilter;
use nbtree::{Compound, Compression};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn open(path: &OsStr) -> Result<Box<dyn Read>> {
    if path == "-" {
        Ok(Box::new(io::stdin()))
    } else {
        Ok(Box::new(BufReader::new(File::open(path)?)))
    }
}

fn filter(args: &ArgMatches) -> Option<NbtFilter> {
    if let Some(paths) = args.values_of("include") {
        return Some(NbtFilter::with(paths));
    }
    args.values_of("exclude").map(NbtFilter::without)
}

fn read(args: &ArgMatches) -> Result<Compound> {
    let path = args.value_of_os("input").unwrap_or_else(|| OsStr::new("-"));
    let mut input = open(path)?;

    if args.is_present("snbt") {
        let mut text = String::new();
        input.read_to_string(&mut text)?;
        return Ok(nbtree_snbt::compound_from_str(&text)?);
    }

    match filter(args) {
        Some(filter) => {
            debug!("{:?} filter: {:?}", filter.mode(), filter.tags());
            Ok(nbtree::from_reader_filtered(input, &filter)?)
        }
        None => Ok(nbtree::from_reader(input)?),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("nbt-dump")
        .about("Print or convert an NBT document, optionally keeping only parts of it")
        .arg(
            Arg::with_name("input")
                .takes_value(true)
                .help("NBT file to read, gzipped or not. Reads stdin if missing or '-'"),
        )
        .arg(
            Arg::with_name("include")
                .long("include")
                .short("i")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .conflicts_with("exclude")
                .help("only keep this dotted path, eg Data.SpawnX"),
        )
        .arg(
            Arg::with_name("exclude")
                .long("exclude")
                .short("e")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("drop this dotted path, eg Data.Player"),
        )
        .arg(
            Arg::with_name("snbt")
                .long("snbt")
                .takes_value(false)
                .conflicts_with_all(&["include", "exclude"])
                .help("the input is SNBT text rather than binary NBT"),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .takes_value(false)
                .help("print JSON instead of SNBT"),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .short("o")
                .takes_value(true)
                .help("write binary NBT to this file instead of printing"),
        )
        .arg(
            Arg::with_name("compress")
                .long("compress")
                .takes_value(false)
                .requires("out")
                .help("gzip the file written with --out"),
        )
        .get_matches();

    let root = read(&matches)?;
    info!("read compound with {} entries", root.len());

    if let Some(out) = matches.value_of_os("out") {
        let compression = if matches.is_present("compress") {
            Compression::Gzip
        } else {
            Compression::None
        };
        nbtree::write_file(out, &root, compression)?;
        info!("wrote {}", out.to_string_lossy());
    } else if matches.is_present("json") {
        println!("{}", serde_json::to_string_pretty(&root)?);
    } else {
        println!("{}", root);
    }

    Ok(())
}
