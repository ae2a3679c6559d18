/// One entry of the supported currency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_CURRENCY: &str = "USD";

pub static CURRENCIES: [Currency; 8] = [
    Currency { code: "USD", symbol: "$", name: "US Dollar" },
    Currency { code: "EUR", symbol: "€", name: "Euro" },
    Currency { code: "GBP", symbol: "£", name: "British Pound" },
    Currency { code: "RON", symbol: "lei", name: "Romanian Leu" },
    Currency { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    Currency { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    Currency { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    Currency { code: "CHF", symbol: "CHF", name: "Swiss Franc" },
];

impl Currency {
    /// Exact lookup by ISO code.
    pub fn find(code: &str) -> Option<&'static Currency> {
        CURRENCIES.iter().find(|c| c.code == code)
    }

    /// Currency used to display amounts for a stored code. Unknown codes
    /// render as USD; the stored code itself is not touched.
    pub fn for_display(code: &str) -> &'static Currency {
        Self::find(code).unwrap_or(&CURRENCIES[0])
    }

    pub fn codes() -> impl Iterator<Item = &'static str> {
        CURRENCIES.iter().map(|c| c.code)
    }

    /// Lei is written after the amount; every other symbol goes in front.
    pub fn symbol_after(&self) -> bool {
        self.code == "RON"
    }
}
