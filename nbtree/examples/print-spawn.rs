//! Prints the spawn point of a world by reading only those three values out of
//! its level.dat. Everything else in the file is skipped without decoding.

use nbtree::filter::NbtFilter;

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let file = std::fs::File::open(&args[1]).unwrap();

    let filter = NbtFilter::with(["Data.SpawnX", "Data.SpawnY", "Data.SpawnZ"]);
    let level = nbtree::from_reader_filtered(file, &filter).unwrap();

    println!("{}", level);
    match (
        level.get_int("Data.SpawnX"),
        level.get_int("Data.SpawnY"),
        level.get_int("Data.SpawnZ"),
    ) {
        (Some(x), Some(y), Some(z)) => println!("spawn is at {},{},{}", x, y, z),
        _ => println!("no spawn point found"),
    }
}
