//! Icons compiled into the binary, used when no catalog path is configured.

pub(super) struct BuiltinIcon {
    pub name: &'static str,
    pub display_name: &'static str,
    pub symbol: &'static str,
    pub file_name: &'static str,
    pub color: &'static str,
    pub markup: &'static str,
}

macro_rules! builtin_icon {
    ($name:literal, $display:literal, $symbol:literal, $file:literal, $color:literal) => {
        BuiltinIcon {
            name: $name,
            display_name: $display,
            symbol: $symbol,
            file_name: $file,
            color: $color,
            markup: include_str!(concat!("../../assets/icons/", $file)),
        }
    };
}

pub(super) const BUILTIN_ICONS: &[BuiltinIcon] = &[
    builtin_icon!("bitcoin", "Bitcoin", "BTC", "btc.svg", "#F7931A"),
    builtin_icon!("ethereum", "Ethereum", "ETH", "eth.svg", "#627EEA"),
    builtin_icon!("tether", "Tether", "USDT", "usdt.svg", "#26A17B"),
    builtin_icon!("solana", "Solana", "SOL", "sol.svg", "#14F195"),
    builtin_icon!("cardano", "Cardano", "ADA", "ada.svg", "#0033AD"),
    builtin_icon!("dogecoin", "Dogecoin", "DOGE", "doge.svg", "#C2A633"),
    builtin_icon!("litecoin", "Litecoin", "LTC", "ltc.svg", "#BFBBBB"),
    builtin_icon!("monero", "Monero", "XMR", "xmr.svg", "#FF6600"),
];
