pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let af = f64::from(a);
    let bf = f64::from(b);
    (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
}
