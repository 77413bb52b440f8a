/// A fully composed frame owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
    /// Whether `data` holds premultiplied alpha.
    pub premultiplied: bool,
}

impl RenderedFrame {
    /// RGBA bytes at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Opaque RGB8 bytes, flattening over black.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() / 4 * 3);
        for px in self.data.chunks_exact(4) {
            if self.premultiplied {
                out.extend_from_slice(&px[..3]);
            } else {
                let a = u16::from(px[3]);
                out.extend(
                    px[..3]
                        .iter()
                        .map(|&c| crate::foundation::math::mul_div255_u8(u16::from(c), a)),
                );
            }
        }
        out
    }
}
