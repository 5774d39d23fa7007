//! Series identifiers.
//!
//! Each enum lists its variants in display order via `ALL`; that order is
//! also the stacking order for spending and tax charts.

use std::fmt;

/// A fixed set of series identifiers, listed in display order.
pub trait SeriesId: Copy + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Position in `ALL`.
    fn index(self) -> usize;
}

macro_rules! series_enum {
    ($(#[$attr:meta])* $vis:vis enum $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Position in `ALL`, usable as an array index.
            #[inline]
            pub fn index(self) -> usize {
                self as usize
            }

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Case-insensitive lookup by label or variant-style name
            /// (`"green energy"`, `"green-energy"`, `"GreenEnergy"`).
            pub fn parse(s: &str) -> Option<Self> {
                let key = normalize(s);
                $name::ALL.iter().copied().find(|v| normalize(v.as_str()) == key)
            }
        }

        impl SeriesId for $name {
            const ALL: &'static [$name] = $name::ALL;

            #[inline]
            fn index(self) -> usize {
                $name::index(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

series_enum! {
    /// New government spending categories ($bn).
    pub enum SpendingCategory {
        Health      => "Health",
        Housing     => "Housing",
        Education   => "Education",
        GreenEnergy => "Green Energy",
        Military    => "Military",
    }
}

series_enum! {
    /// Economies compared on debt-to-GDP (%).
    pub enum Economy {
        Australia   => "Australia",
        OecdAverage => "OECD Avg",
        Usa         => "USA",
        Germany     => "Germany",
    }
}

series_enum! {
    /// Tax revenue streams ($bn).
    pub enum TaxStream {
        Income       => "Income Tax",
        Corporate    => "Corporate Tax",
        Gst          => "GST",
        CapitalGains => "Capital Gains",
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
