//! Mock market data shown by the dashboard panels. All values are fixed.

use crate::decimal::DecimalAmount;
use crate::trade::TradeSide;

fn dec(mantissa: i64, scale: u32) -> DecimalAmount {
    DecimalAmount::from_parts(mantissa, scale)
}

/// One row of the market overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker {
    pub symbol: &'static str,
    pub price: DecimalAmount,
    pub change: &'static str,
    pub volume: &'static str,
    pub is_positive: bool,
}

pub fn tickers() -> Vec<Ticker> {
    let row = |symbol, price, change, volume, is_positive| Ticker {
        symbol,
        price,
        change,
        volume,
        is_positive,
    };
    vec![
        row("BTC/USDT", dec(4_325_000, 2), "+2.45%", "24.5B", true),
        row("ETH/USDT", dec(265_000, 2), "+1.82%", "12.3B", true),
        row("BNB/USDT", dec(31_550, 2), "-0.75%", "2.1B", false),
        row("ADA/USDT", dec(45, 2), "+3.22%", "890M", true),
        row("SOL/USDT", dec(9_875, 2), "+5.12%", "1.8B", true),
        row("DOT/USDT", dec(685, 2), "-1.23%", "420M", false),
    ]
}

/// One price level of the order book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLevel {
    pub price: DecimalAmount,
    pub amount: DecimalAmount,
    pub total: DecimalAmount,
}

fn level(price: i64, amount: i64, total: i64) -> BookLevel {
    BookLevel {
        price: dec(price, 2),
        amount: dec(amount, 4),
        total: dec(total, 2),
    }
}

/// Sell side, best (lowest) ask last so it sits next to the mid price.
pub fn asks() -> Vec<BookLevel> {
    vec![
        level(4_328_000, 1234, 534_243),
        level(4_327_500, 5678, 2_457_815),
        level(4_327_000, 2345, 1_014_632),
        level(4_326_500, 8901, 3_851_521),
        level(4_326_000, 3456, 1_494_394),
    ]
}

/// Buy side, best (highest) bid first.
pub fn bids() -> Vec<BookLevel> {
    vec![
        level(4_325_500, 4567, 1_975_485),
        level(4_325_000, 6789, 2_936_925),
        level(4_324_500, 1234, 533_643),
        level(4_324_000, 8901, 3_847_922),
        level(4_323_500, 2345, 1_013_863),
    ]
}

/// The banner between the two sides of the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MidPrice {
    pub price: &'static str,
    pub change: &'static str,
}

pub const MID_PRICE: MidPrice = MidPrice {
    price: "$43,257.50",
    change: "+2.45% (+$1,032.45)",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    pub symbol: &'static str,
    pub amount: DecimalAmount,
    pub value: DecimalAmount,
    pub change: &'static str,
    pub is_positive: bool,
}

pub fn holdings() -> Vec<Holding> {
    let row = |symbol, amount, value, change, is_positive| Holding {
        symbol,
        amount,
        value,
        change,
        is_positive,
    };
    vec![
        row("BTC", dec(5432, 4), dec(2_347_850, 2), "+2.45%", true),
        row("ETH", dec(12_345, 3), dec(3_274_525, 2), "+1.82%", true),
        row("BNB", dec(4567, 2), dec(1_441_335, 2), "-0.75%", false),
        row("USDT", dec(1_500_000, 2), dec(1_500_000, 2), "0.00%", true),
    ]
}

/// Sum of all holding values.
pub fn portfolio_value(holdings: &[Holding]) -> DecimalAmount {
    holdings
        .iter()
        .fold(DecimalAmount::zero(), |sum, h| sum + h.value.clone())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TxStatus {
    Completed,
    Pending,
}

impl TxStatus {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxRecord {
    pub id: u32,
    pub side: TradeSide,
    pub symbol: &'static str,
    pub amount: DecimalAmount,
    pub price: DecimalAmount,
    pub total: DecimalAmount,
    pub time: &'static str,
    pub status: TxStatus,
}

pub fn transactions() -> Vec<TxRecord> {
    vec![
        TxRecord {
            id: 1,
            side: TradeSide::Buy,
            symbol: "BTC/USDT",
            amount: dec(1234, 4),
            price: dec(4_315_000, 2),
            total: dec(532_471, 2),
            time: "2024-01-15 14:30:25",
            status: TxStatus::Completed,
        },
        TxRecord {
            id: 2,
            side: TradeSide::Sell,
            symbol: "ETH/USDT",
            amount: dec(25, 1),
            price: dec(264_000, 2),
            total: dec(660_000, 2),
            time: "2024-01-15 13:45:12",
            status: TxStatus::Completed,
        },
        TxRecord {
            id: 3,
            side: TradeSide::Buy,
            symbol: "BNB/USDT",
            amount: dec(150, 1),
            price: dec(31_550, 2),
            total: dec(473_250, 2),
            time: "2024-01-15 12:20:08",
            status: TxStatus::Completed,
        },
        TxRecord {
            id: 4,
            side: TradeSide::Sell,
            symbol: "ADA/USDT",
            amount: dec(10_000, 1),
            price: dec(45, 2),
            total: dec(45_000, 2),
            time: "2024-01-15 11:15:33",
            status: TxStatus::Pending,
        },
    ]
}
