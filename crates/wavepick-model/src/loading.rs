// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Problem instance loader for the wave selection domain.
//!
//! Turns whitespace-delimited text streams into a validated `(Model, Band)`
//! pair. Inputs are read in a fixed order, `#` introduces a comment running
//! to the end of the line, and every precondition violation is reported
//! before any search can start.
//!
//! The format (whitespace-separated tokens):
//!
//! ```raw
//! O C                    # number of orders, number of corridors
//! k  i_1 q_1 ... i_k q_k # per order: entry count, then (item, quantity) pairs
//! ...                    # O order lines in total
//! k  i_1 q_1 ... i_k q_k # per corridor: entry count, then (item, supply) pairs
//! ...                    # C corridor lines in total
//! LB UB                  # band bounds for the total picked units
//! ```
//!
//! Line breaks carry no meaning; the token stream alone defines the
//! instance.

use crate::{
    band::Band,
    index::{CorridorIndex, ItemIndex, OrderIndex},
    model::{Model, ModelBuildError, ModelBuilder},
};
use num_traits::{PrimInt, Signed};
use std::{
    collections::VecDeque,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// The error type for the instance loading process.
#[derive(Debug)]
pub enum ProblemLoaderError {
    /// An I/O error occurred while reading the input stream.
    Io(std::io::Error),
    /// The input stream ended before all expected tokens were read.
    UnexpectedEof,
    /// A token could not be parsed into the expected numeric type.
    Parse(ParseTokenError),
    /// The instance dimensions (orders or corridors) are not positive.
    InvalidDimensions,
    /// The band bounds are inverted (lower > upper).
    InvalidBand,
    /// The accumulated data failed model validation.
    Build(ModelBuildError),
}

/// Details about a failed token parsing attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTokenError {
    /// The token that failed to parse.
    pub token: String,
    /// The name of the type we tried to parse into (e.g., "i64").
    pub type_name: &'static str,
}

impl std::fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Could not parse token '{}' as type {}",
            self.token, self.type_name
        )
    }
}

impl std::error::Error for ParseTokenError {}

impl std::fmt::Display for ProblemLoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of file while parsing instance"),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::InvalidDimensions => {
                write!(f, "Instance dimensions (orders and corridors) must be positive")
            }
            Self::InvalidBand => write!(f, "Band lower bound exceeds upper bound"),
            Self::Build(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ProblemLoaderError {}

impl From<std::io::Error> for ProblemLoaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseTokenError> for ProblemLoaderError {
    fn from(e: ParseTokenError) -> Self {
        Self::Parse(e)
    }
}

impl From<ModelBuildError> for ProblemLoaderError {
    fn from(e: ModelBuildError) -> Self {
        Self::Build(e)
    }
}

/// A loader for wave selection instances.
///
/// Stateless apart from the numeric type parameter; one loader can parse
/// any number of instances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProblemLoader<T> {
    _numeric: std::marker::PhantomData<T>,
}

impl<T> ProblemLoader<T>
where
    T: PrimInt + Signed + FromStr,
{
    /// Creates a new `ProblemLoader`.
    #[inline]
    pub fn new() -> Self {
        Self {
            _numeric: std::marker::PhantomData,
        }
    }

    /// Loads an instance from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<(Model<T>, Band<T>), ProblemLoaderError> {
        let mut scanner = Scanner::new(reader);

        let num_orders: usize = scanner.next()?;
        let num_corridors: usize = scanner.next()?;
        if num_orders == 0 || num_corridors == 0 {
            return Err(ProblemLoaderError::InvalidDimensions);
        }

        let mut builder = ModelBuilder::new(num_orders, num_corridors);

        for order in 0..num_orders {
            let entries: usize = scanner.next()?;
            for _ in 0..entries {
                let item: usize = scanner.next()?;
                let quantity: T = scanner.next()?;
                builder.add_order_demand(
                    OrderIndex::new(order),
                    ItemIndex::new(item),
                    quantity,
                );
            }
        }

        for corridor in 0..num_corridors {
            let entries: usize = scanner.next()?;
            for _ in 0..entries {
                let item: usize = scanner.next()?;
                let supply: T = scanner.next()?;
                builder.add_corridor_supply(
                    CorridorIndex::new(corridor),
                    ItemIndex::new(item),
                    supply,
                );
            }
        }

        let lower: T = scanner.next()?;
        let upper: T = scanner.next()?;
        if lower > upper {
            return Err(ProblemLoaderError::InvalidBand);
        }

        let model = builder.build()?;
        Ok((model, Band::new(lower, upper)))
    }

    /// Loads an instance from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(Model<T>, Band<T>), ProblemLoaderError> {
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads an instance from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<(Model<T>, Band<T>), ProblemLoaderError> {
        self.from_bufread(BufReader::new(reader))
    }

    /// Loads an instance from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<(Model<T>, Band<T>), ProblemLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Reads whitespace-delimited tokens from a reader, stripping `#` comments.
struct Scanner<R> {
    reader: R,
    line: String,
    tokens: VecDeque<String>,
}

impl<R: BufRead> Scanner<R> {
    #[inline]
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            tokens: VecDeque::new(),
        }
    }

    /// Reads lines until at least one token is buffered. Returns `Ok(false)`
    /// on end of input.
    fn refill(&mut self) -> Result<bool, ProblemLoaderError> {
        while self.tokens.is_empty() {
            self.line.clear();
            let read = self
                .reader
                .read_line(&mut self.line)
                .map_err(ProblemLoaderError::Io)?;
            if read == 0 {
                return Ok(false);
            }

            let content = match self.line.find('#') {
                Some(position) => &self.line[..position],
                None => self.line.as_str(),
            };
            self.tokens
                .extend(content.split_whitespace().map(str::to_owned));
        }
        Ok(true)
    }

    /// Reads the next token and parses it into `V`.
    fn next<V>(&mut self) -> Result<V, ProblemLoaderError>
    where
        V: FromStr,
    {
        if !self.refill()? {
            return Err(ProblemLoaderError::UnexpectedEof);
        }

        // refill() guarantees a buffered token here.
        let token = match self.tokens.pop_front() {
            Some(token) => token,
            None => return Err(ProblemLoaderError::UnexpectedEof),
        };

        token.parse::<V>().map_err(|_| {
            ProblemLoaderError::Parse(ParseTokenError {
                token,
                type_name: std::any::type_name::<V>(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_INSTANCE: &str = r#"
        2 2              # O=2 orders, C=2 corridors
        2  0 3  2 1      # order 0: 3 units of item 0, 1 unit of item 2
        1  1 2           # order 1: 2 units of item 1
        2  0 4  2 1      # corridor 0
        2  1 2  3 5      # corridor 1
        2 6              # band
    "#;

    #[test]
    fn test_loads_and_maps_correctly() {
        let loader = ProblemLoader::<i64>::new();
        let (model, band) = loader.from_str(SMALL_INSTANCE).unwrap();

        assert_eq!(model.num_orders(), 2);
        assert_eq!(model.num_corridors(), 2);
        assert_eq!(model.order_total_units(OrderIndex::new(0)), 4);
        assert_eq!(model.order_total_units(OrderIndex::new(1)), 2);
        assert_eq!(
            model.corridor_supply_of(CorridorIndex::new(1), ItemIndex::new(3)),
            5
        );
        assert_eq!(band, Band::new(2, 6));
    }

    #[test]
    fn test_tokens_may_span_lines_arbitrarily() {
        let flat = "1 1 1 0 2 1 0 3 0 5";
        let loader = ProblemLoader::<i64>::new();
        let (model, band) = loader.from_str(flat).unwrap();

        assert_eq!(model.num_orders(), 1);
        assert_eq!(model.order_demand_of(OrderIndex::new(0), ItemIndex::new(0)), 2);
        assert_eq!(
            model.corridor_supply_of(CorridorIndex::new(0), ItemIndex::new(0)),
            3
        );
        assert_eq!(band, Band::new(0, 5));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let loader = ProblemLoader::<i64>::new();
        let result = loader.from_str("0 3");
        assert!(matches!(result, Err(ProblemLoaderError::InvalidDimensions)));
    }

    #[test]
    fn test_inverted_band_rejected() {
        let data = "1 1  1 0 1  1 0 1  9 3";
        let loader = ProblemLoader::<i64>::new();
        let result = loader.from_str(data);
        assert!(matches!(result, Err(ProblemLoaderError::InvalidBand)));
    }

    #[test]
    fn test_parse_error_carries_token() {
        let loader = ProblemLoader::<i64>::new();
        match loader.from_str("2 garbage") {
            Err(ProblemLoaderError::Parse(e)) => {
                assert_eq!(e.token, "garbage");
                assert!(e.type_name.contains("usize"));
            }
            other => panic!("expected a Parse error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_truncated_input_reports_eof() {
        let loader = ProblemLoader::<i64>::new();
        let result = loader.from_str("2 2  1 0 3");
        assert!(matches!(result, Err(ProblemLoaderError::UnexpectedEof)));
    }

    #[test]
    fn test_non_positive_demand_is_a_build_error() {
        let data = "1 1  1 0 0  1 0 1  0 5";
        let loader = ProblemLoader::<i64>::new();
        let result = loader.from_str(data);
        assert!(matches!(result, Err(ProblemLoaderError::Build(_))));
    }
}
