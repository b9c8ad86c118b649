//! Takes a path to a level.dat file for a world, and writes a new level.dat
//! file in the current directory with the world spawn set to 0,100,0.

use nbtree::{Compound, Compression, Value};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    let mut level = nbtree::read_file(&args[1]).unwrap();

    match level.get_mut("Data") {
        Some(Value::Compound(data)) => set_spawn(data, 0, 100, 0),
        _ => panic!("level.dat has no Data compound"),
    }

    nbtree::write_file("level.dat", &level, Compression::Gzip).unwrap();
}

fn set_spawn(data: &mut Compound, x: i32, y: i32, z: i32) {
    data.insert("SpawnX", x);
    data.insert("SpawnY", y);
    data.insert("SpawnZ", z);
}
