use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes `buffer` as binary PPM (P6) into any writer.
pub fn encode_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // P6: binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{width} {height}")?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;
    writer.flush()
}

pub fn write_ppm(buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
    let file = File::create(filepath)?;
    encode_ppm(buffer, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    #[test]
    fn test_encodes_header_then_raw_rgb() {
        let mut buffer = PixelBuffer::new(PixelRect::from_size(2, 2).unwrap());
        buffer
            .set_pixel(Point { x: 1, y: 0 }, Colour::rgb(255, 0, 10))
            .unwrap();
        let mut encoded = Vec::new();

        encode_ppm(&buffer, &mut encoded).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&encoded[..header.len()], header);
        assert_eq!(&encoded[header.len()..header.len() + 6], &[0, 0, 0, 255, 0, 10]);
        assert_eq!(encoded.len(), header.len() + 12);
    }
}
