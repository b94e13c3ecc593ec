pub struct UiText {
    pub app_title: &'static str,
    pub app_caption: &'static str,

    pub sidebar_heading: &'static str,
    pub symbol_label: &'static str,
    pub symbol_examples: &'static [&'static str],
    pub clock_heading: &'static str,
    pub day_type_heading: &'static str,
    pub day_type_label: &'static str,

    pub auto_heading: &'static str,
    pub rr_label: &'static str,
    pub reroll_button: &'static str,
    pub accept_button: &'static str,
    pub no_suggestion: &'static str,

    pub manual_heading: &'static str,
    pub prev_button: &'static str,
    pub next_button: &'static str,
    pub reset_button: &'static str,
    pub mark_long_button: &'static str,
    pub mark_short_button: &'static str,
    pub close_position_button: &'static str,

    pub combined_heading: &'static str,

    pub journals_heading: &'static str,
    pub journal_empty: &'static str,
    pub copy_json_button: &'static str,
    pub delete_button: &'static str,
    pub confirm_question: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,

    pub label_long: &'static str,
    pub label_short: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Replay Desk",
    app_caption: "Unified Manual & Automated Trading Replay",

    sidebar_heading: "Market Context",
    symbol_label: "Symbol",
    symbol_examples: &[
        "Stocks: AAPL, MSFT, TSLA",
        "FX: EURUSD=X, GBPJPY=X",
        "Crypto: BTC-USD, ETH-USD",
        "Futures: ES=F, NQ=F",
    ],
    clock_heading: "Current Time",
    day_type_heading: "Day Type",
    day_type_label: "Override Day Type",

    auto_heading: "Automated Suggestions",
    rr_label: "Risk:Reward",
    reroll_button: "New suggestion",
    accept_button: "Accept into journal",
    no_suggestion: "Nothing actionable right now.",

    manual_heading: "Manual Replay",
    prev_button: "⬅ Previous",
    next_button: "Next ➡",
    reset_button: "🔄 Reset",
    mark_long_button: "Mark Long",
    mark_short_button: "Mark Short",
    close_position_button: "Close Position",

    combined_heading: "Price Overview",

    journals_heading: "Trade Journals",
    journal_empty: "No trades yet.",
    copy_json_button: "Copy JSON",
    delete_button: "🗑 Delete",
    confirm_question: "Confirm deletion?",
    confirm_button: "Yes, delete",
    cancel_button: "Cancel",

    label_long: "Long",
    label_short: "Short",
};
