// luhngen-rs/luhngen/src/types.rs

//! Input and output records.

use derive_more::Display;

use crate::checksum;

/// Number/month/year/CVV as parsed from a delimited pattern. Absent fields
/// are synthesized per generated card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Number segment: digits and wildcards
    pub number: String,
    /// Expiry month, or `None` to draw one
    pub month: Option<String>,
    /// Two-digit expiry year, or `None` to draw one
    pub year: Option<String>,
    /// CVV, or `None` to draw one
    pub cvv: Option<String>,
}

impl Quad {
    /// Quad with only the number set
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Self::default()
        }
    }

    /// Fix the month
    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Fix the year
    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Fix the CVV
    pub fn cvv(mut self, cvv: impl Into<String>) -> Self {
        self.cvv = Some(cvv.into());
        self
    }

    /// Pull a complete quad out of free-form card text such as
    /// `"4111111111111111 07/2029 123"`.
    ///
    /// Digit runs are read left to right: a 16-digit run is the number, a
    /// 4-digit run starting with `20` is the year, the first 2-digit run no
    /// greater than 12 is the month, a later 2-digit run is the year, and
    /// the first remaining 3 or 4 digit run is the CVV. Years are stored as
    /// two digits. Returns `None` unless all four fields were found.
    pub fn from_text(text: &str) -> Option<Self> {
        let (mut number, mut month, mut year, mut cvv) = (None, None, None, None);

        for run in text
            .split(|c: char| !c.is_ascii_digit())
            .filter(|run| !run.is_empty())
        {
            match run.len() {
                16 => number = Some(run),
                4 if run.starts_with("20") => year = Some(&run[2..]),
                2 if month.is_none() && run <= "12" => month = Some(run),
                2 if year.is_none() && !run.starts_with("20") => year = Some(run),
                3 | 4 if cvv.is_none() => cvv = Some(run),
                _ => {}
            }
        }

        Some(
            Self::new(number?)
                .month(month?)
                .year(year?)
                .cvv(cvv?),
        )
    }
}

/// A synthesized card. Renders as `number|MM|YY|CVV`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}|{}|{}|{}", number, month, year, cvv)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedCard {
    number: String,
    month: String,
    year: String,
    cvv: String,
}

impl GeneratedCard {
    /// Assemble a card from its fields. No validation is performed.
    pub fn new(
        number: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            month: month.into(),
            year: year.into(),
            cvv: cvv.into(),
        }
    }

    /// Card number digits
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Two-digit month
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Two-digit year, read as 20YY
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Card verification value
    pub fn cvv(&self) -> &str {
        &self.cvv
    }

    /// Whether the number passes the Luhn check
    pub fn is_luhn_valid(&self) -> bool {
        checksum::is_valid(&self.number)
    }

    /// Split the record back into its fields
    pub fn into_parts(self) -> (String, String, String, String) {
        (self.number, self.month, self.year, self.cvv)
    }
}
