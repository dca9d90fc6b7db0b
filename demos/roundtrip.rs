use bmpstego::Raster;
use std::{env, fs, process};

fn main() {
    let args: Vec<_> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: roundtrip <file>");
        process::exit(2);
    }

    let input = &args[1];
    let data = fs::read(input).unwrap();

    let dir = env::temp_dir();
    let bitmap = dir.join("roundtrip.bmp");
    let text = dir.join("roundtrip.txt");

    let raster = Raster::encode_file(input, &bitmap).unwrap();
    let decoded = Raster::decode_file(&bitmap, &text).unwrap();

    assert_eq!(raster, decoded.raster);
    assert_eq!(&data[..raster.pixel_count()], decoded.bytes);

    println!(
        "{} bytes in, {}x{} pixels, {} bytes dropped",
        data.len(),
        raster.width,
        raster.height,
        data.len() - raster.pixel_count()
    );
    println!("Hex text written to {}", text.display());
}
