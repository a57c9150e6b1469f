//! C header output.
//!
//! A header holds one include guard and one `PROGMEM` array, rows indented
//! by a tab:
//!
//! ```text
//! #ifndef SINE_U8X8_H
//! #define SINE_U8X8_H
//! const uint8_t sine_u8x8[] PROGMEM = {
//!      0x80,  0xda,  0xff,  0xda,  0x80,  0x25,  0x00,  0x25
//! };
//! #endif
//! ```


use std::fmt;
use std::io::{self, Write};

use crate::DataType;

/// Places the array in program flash rather than RAM on AVR targets.
pub const STORAGE_ATTR: &str = "PROGMEM";

/// Values per row of the array literal.
pub const ROW_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct Header<'a> {
    name: &'a str,
    dtype: DataType,
    values: &'a [i64],
}

impl<'a> Header<'a> {
    pub fn new(name: &'a str, dtype: DataType, values: &'a [i64]) -> Self {
        Self {
            name,
            dtype,
            values,
        }
    }

    pub fn guard(&self) -> String {
        format!("{}_H", self.name.to_uppercase())
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        write!(writer, "{self}")?;
        writer.flush()
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.guard();
        writeln!(f, "#ifndef {guard}")?;
        writeln!(f, "#define {guard}")?;
        write!(
            f,
            "const {} {}[] {} = {{\n\t",
            self.dtype.c_type(),
            self.name,
            STORAGE_ATTR
        )?;

        let width = self.dtype.hex_digits();
        let last = self.values.len().saturating_sub(1);
        for (n, value) in self.values.iter().enumerate() {
            let sign = if *value < 0 { '-' } else { ' ' };
            write!(f, "{sign}0x{:0width$x}", value.unsigned_abs())?;

            if n != last {
                let separator = if n % ROW_WIDTH == ROW_WIDTH - 1 {
                    ",\n\t"
                } else {
                    ", "
                };
                f.write_str(separator)?;
            }
        }

        writeln!(f, "\n}};")?;
        writeln!(f, "#endif")
    }
}
