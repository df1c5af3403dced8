use keypad_digits::image::GrayImageU8;
use keypad_digits::CropBox;

pub const PAPER_LEVEL: u8 = 220;
pub const INK_LEVEL: u8 = 30;

const STROKE: usize = 8;
const INSET_X: usize = 20;
const INSET_Y: usize = 25;

/// Seven-segment layout (`a`..`g`) of each digit.
fn segments(digit: char) -> &'static str {
    match digit {
        '0' => "abcdef",
        '1' => "bc",
        '2' => "abged",
        '3' => "abgcd",
        '4' => "fgbc",
        '5' => "afgcd",
        '6' => "afgedc",
        '7' => "abc",
        '8' => "abcdefg",
        '9' => "abcdfg",
        other => panic!("no glyph for {other:?}"),
    }
}

fn fill(buf: &mut [u8], width: usize, rect: [usize; 4], value: u8) {
    for y in rect[1]..rect[3] {
        for x in rect[0]..rect[2] {
            buf[y * width + x] = value;
        }
    }
}

/// Bright raster with dark seven-segment digits drawn inside each box.
///
/// Closed digits enclose the canonical number of paper regions: "8" two,
/// "0"/"6"/"9" one, the rest none.
pub fn keypad_raster(width: usize, height: usize, boxes: &[CropBox], code: &str) -> GrayImageU8 {
    assert_eq!(boxes.len(), code.chars().count(), "one digit per box");
    let mut buf = vec![PAPER_LEVEL; width * height];
    let t = STROKE;
    for (crop, digit) in boxes.iter().zip(code.chars()) {
        let x0 = crop.left + INSET_X;
        let x1 = crop.right - INSET_X;
        let y0 = crop.top + INSET_Y;
        let y1 = crop.bottom - INSET_Y;
        let ym = (y0 + y1) / 2;
        for seg in segments(digit).chars() {
            let rect = match seg {
                'a' => [x0, y0, x1, y0 + t],
                'b' => [x1 - t, y0, x1, ym + t / 2],
                'c' => [x1 - t, ym - t / 2, x1, y1],
                'd' => [x0, y1 - t, x1, y1],
                'e' => [x0, ym - t / 2, x0 + t, y1],
                'f' => [x0, y0, x0 + t, ym + t / 2],
                'g' => [x0, ym - t / 2, x1, ym + t / 2],
                _ => unreachable!(),
            };
            fill(&mut buf, width, rect, INK_LEVEL);
        }
    }
    GrayImageU8::new(width, height, buf)
}

/// Three boxes laid out left to right on a small canvas.
pub fn small_boxes() -> Vec<CropBox> {
    (0..3)
        .map(|i| CropBox::new(10 + i * 90, 10, 100 + i * 90, 180))
        .collect()
}
