use keypad_digits::image::io::{load_grayscale_image, save_grayscale_u8, GrayImageU8};
use keypad_digits::image::ImageView;
use keypad_digits::CropBox;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(i), Some(o)) => (i, o),
        _ => return Err(usage()),
    };

    let gray = load_grayscale_image(Path::new(&input)).map_err(|e| e.to_string())?;
    let view = gray.as_view();
    let region = CropBox::central_region(view.w, view.h);
    if !region.fits(view.w, view.h) {
        return Err(format!("{input}: image too small to crop ({}x{})", view.w, view.h));
    }
    println!("Source {}x{}, crop {:?}", view.w, view.h, <[usize; 4]>::from(region));

    let mut data = Vec::with_capacity(region.width() * region.height());
    for y in region.top..region.bottom {
        data.extend_from_slice(&view.row(y)[region.left..region.right]);
    }
    let cropped = GrayImageU8::new(region.width(), region.height(), data);
    save_grayscale_u8(&cropped, Path::new(&output))?;
    println!("Cropped image written to {output}");
    Ok(())
}

fn usage() -> String {
    "Usage: keypad_crop <input image> <output image>".to_string()
}
