use std::fmt::Display;

use twofloat::TwoFloat;

use crate::{babylonian, perfect, Error, SqrtApprox, MAX_PRECISION};

/// Everything printed for one perfect number.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub n: u64,
    pub divisors: Vec<u64>,
    pub expected: TwoFloat,
    pub computed: SqrtApprox,
    pub precision: u32,
}

impl Report {
    pub fn new(n: u64, precision: u32) -> Result<Self, Error> {
        let radicand = n as f64;
        Ok(Self {
            n,
            divisors: perfect::proper_divisors(n),
            computed: babylonian::sqrt_babylonian_to(radicand, precision)?,
            expected: babylonian::reference_sqrt(radicand)?,
            precision,
        })
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Perfect number: {} = ", self.n)?;
        for (ind, d) in self.divisors.iter().enumerate() {
            if ind > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", d)?;
        }
        writeln!(f, ";")?;
        writeln!(
            f,
            "Expected sqrt() of {}\t\t= {};",
            self.n,
            Fixed(self.expected, self.precision)
        )?;
        writeln!(
            f,
            "Computed square root of {}\t= {};",
            self.n,
            Fixed(self.computed.root, self.precision)
        )?;
        writeln!(f, "\treached in {} iterations.", self.computed.iterations)
    }
}

/// A double-double value rounded to a fixed number of decimals.
///
/// `TwoFloat`'s own formatting prints the two halves separately, so the digits are taken
/// from the value scaled to an integer instead.
struct Fixed(TwoFloat, u32);

impl Display for Fixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let decimals = self.1.min(MAX_PRECISION);
        let scaled = self.0 * 10f64.powi(decimals as i32);
        let whole = scaled.hi().floor();
        let frac = (scaled - whole).hi();
        let units = whole as i128 + (frac + 0.5).floor() as i128;

        if units < 0 {
            write!(f, "-")?;
        }
        let units = units.unsigned_abs();
        if decimals == 0 {
            return write!(f, "{}", units);
        }

        let unit = 10u128.pow(decimals);
        write!(
            f,
            "{}.{:0width$}",
            units / unit,
            units % unit,
            width = decimals as usize
        )
    }
}
