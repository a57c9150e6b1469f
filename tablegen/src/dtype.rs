use std::fmt;

use clap::ValueEnum;

/// C integer type a table is quantized to.
///
/// Unsigned types cover `[0, 2^bits - 1]`, signed types cover
/// `[-2^(bits-1), 2^(bits-1) - 1]`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    U8,
    S8,
    #[default]
    U16,
    S16,
    U32,
    S32,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::U8,
        DataType::S8,
        DataType::U16,
        DataType::S16,
        DataType::U32,
        DataType::S32,
    ];

    pub fn bits(self) -> u32 {
        match self {
            DataType::U8 | DataType::S8 => 8,
            DataType::U16 | DataType::S16 => 16,
            DataType::U32 | DataType::S32 => 32,
        }
    }

    pub fn is_signed(self) -> bool {
        matches!(self, DataType::S8 | DataType::S16 | DataType::S32)
    }

    /// Short tag used on the command line and in table names, e.g. `u16`.
    pub fn tag(self) -> &'static str {
        match self {
            DataType::U8 => "u8",
            DataType::S8 => "s8",
            DataType::U16 => "u16",
            DataType::S16 => "s16",
            DataType::U32 => "u32",
            DataType::S32 => "s32",
        }
    }

    /// Fixed-width C type name from `<stdint.h>`.
    pub fn c_type(self) -> &'static str {
        match self {
            DataType::U8 => "uint8_t",
            DataType::S8 => "int8_t",
            DataType::U16 => "uint16_t",
            DataType::S16 => "int16_t",
            DataType::U32 => "uint32_t",
            DataType::S32 => "int32_t",
        }
    }

    pub fn hex_digits(self) -> usize {
        (self.bits() / 4) as usize
    }

    /// `2^bits - 1`, the factor a normalized sample is scaled by.
    pub fn full_scale(self) -> i64 {
        (1i64 << self.bits()) - 1
    }

    /// Half-range offset subtracted from signed tables.
    pub fn offset(self) -> i64 {
        if self.is_signed() {
            1i64 << (self.bits() - 1)
        } else {
            0
        }
    }

    pub fn min_value(self) -> i64 {
        -self.offset()
    }

    pub fn max_value(self) -> i64 {
        self.full_scale() - self.offset()
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
