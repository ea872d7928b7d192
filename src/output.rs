use crate::skyline::KeyPoint;
use std::io::{self, Write};

/// Writes one `x height` line per key point.
pub fn write_skyline<W: Write>(mut out: W, skyline: &[KeyPoint]) -> io::Result<()> {
    for point in skyline.iter() {
        writeln!(out, "{}", point)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::write_skyline;
    use crate::skyline::KeyPoint;

    #[test]
    fn test_write_skyline() {
        let skyline = vec![
            KeyPoint::GROUND,
            KeyPoint::new(2, 10),
            KeyPoint::new(9, 0),
        ];
        let mut out = Vec::new();
        write_skyline(&mut out, &skyline).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 0\n2 10\n9 0\n");
    }
}
