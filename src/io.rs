//! Read and write cube files
//!
//! A cube file is line-oriented text: one `0`/`1`/`-` pattern per line, most
//! significant variable first, with `-` marking a don't-care position. `#`
//! starts a comment and blank lines are ignored. All patterns in a file share
//! one width, which sets the number of variables.
//!
//! ```text
//! # f(b2, b1, b0)
//! 01-
//! 110
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

use crate::errors::{Error, Result};
use crate::Cube;

/// Parse a single `0`/`1`/`-` pattern, most significant variable first
pub fn parse_pattern(s: &str) -> Result<Cube> {
    let width = s.chars().count();
    if width == 0 || width > Cube::MAX_WIDTH as usize {
        return Err(Error::InvalidPattern(s.to_string()));
    }
    let mut value = 0u64;
    let mut mask = 0u64;
    for c in s.chars() {
        value <<= 1;
        mask <<= 1;
        match c {
            '0' => mask |= 1,
            '1' => {
                value |= 1;
                mask |= 1;
            }
            '-' => (),
            _ => return Err(Error::InvalidPattern(s.to_string())),
        }
    }
    Ok(Cube::new(value, mask))
}

/// Read a cube file; return the cubes and the width they share
pub fn read_cubes<R: Read>(r: R) -> Result<(Vec<Cube>, u32)> {
    let mut cubes = Vec::new();
    let mut width = None;
    for line in BufReader::new(r).lines() {
        let line = line?;
        let pattern = line.split('#').next().unwrap_or("").trim();
        if pattern.is_empty() {
            continue;
        }
        let w = pattern.chars().count();
        match width {
            None => width = Some(w),
            Some(expected) if expected != w => {
                return Err(Error::WidthMismatch { expected, found: w });
            }
            Some(_) => (),
        }
        cubes.push(parse_pattern(pattern)?);
    }
    Ok((cubes, width.unwrap_or(0) as u32))
}

/// Write cubes as a cube file of the given width
pub fn write_cubes<W: Write>(w: &mut W, cubes: &[Cube], n_bits: u32) -> Result<()> {
    writeln!(w, "# Generated by primin")?;
    for c in cubes {
        writeln!(w, "{:width$}", c, width = n_bits as usize)?;
    }
    Ok(())
}

/// Read a cube file from a path
pub fn read_cube_file(path: &Path) -> Result<(Vec<Cube>, u32)> {
    read_cubes(File::open(path)?)
}

/// Write a cube file to a path
pub fn write_cube_file(path: &Path, cubes: &[Cube], n_bits: u32) -> Result<()> {
    let mut f = File::create(path)?;
    write_cubes(&mut f, cubes, n_bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern() {
        assert_eq!(parse_pattern("0110").unwrap(), Cube::minterm(0b0110, 4));
        assert_eq!(parse_pattern("-1-0").unwrap(), Cube::new(0b0100, 0b0101));
        assert_eq!(parse_pattern("---").unwrap(), Cube::new(0, 0));
        assert!(matches!(
            parse_pattern("01x0"),
            Err(Error::InvalidPattern(_))
        ));
        assert!(matches!(parse_pattern(""), Err(Error::InvalidPattern(_))));
    }

    #[test]
    fn test_basic_readwrite() {
        let example = "# cube file
# with a leading comment block

010
1-1   # trailing comment
  110
";
        let (cubes, n_bits) = read_cubes(example.as_bytes()).unwrap();
        assert_eq!(n_bits, 3);
        assert_eq!(
            cubes,
            vec![
                Cube::minterm(0b010, 3),
                Cube::new(0b101, 0b101),
                Cube::minterm(0b110, 3),
            ]
        );

        let mut buf = Vec::new();
        write_cubes(&mut buf, &cubes, n_bits).unwrap();
        let (reread, rewidth) = read_cubes(buf.as_slice()).unwrap();
        assert_eq!(reread, cubes);
        assert_eq!(rewidth, n_bits);
    }

    #[test]
    fn test_width_mismatch() {
        let example = "010\n0110\n";
        assert!(matches!(
            read_cubes(example.as_bytes()),
            Err(Error::WidthMismatch {
                expected: 3,
                found: 4
            })
        ));
    }

    #[test]
    fn test_empty_file() {
        let (cubes, n_bits) = read_cubes("# nothing here\n".as_bytes()).unwrap();
        assert!(cubes.is_empty());
        assert_eq!(n_bits, 0);
    }
}
