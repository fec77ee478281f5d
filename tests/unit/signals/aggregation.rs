use klinesight::models::{BollSignal, MaSignal, MacdSignal, OscillatorSignal, OverallSignal};
use klinesight::signals::aggregation::{aggregate, SignalVotes};

#[test]
fn test_vote_counts() {
    let votes = SignalVotes::count(
        MacdSignal::GoldenCross,
        OscillatorSignal::None,
        MaSignal::Neutral,
        BollSignal::BreakoutDown,
    );
    assert_eq!(votes, SignalVotes { bullish: 2, bearish: 1 });
}

#[test]
fn test_kdj_not_overbought_counts_as_bullish() {
    for kdj in [OscillatorSignal::None, OscillatorSignal::Oversold] {
        let votes = SignalVotes::count(MacdSignal::None, kdj, MaSignal::Neutral, BollSignal::WithinBand);
        assert_eq!(votes.bullish, 1);
        assert_eq!(votes.bearish, 0);
    }
}

#[test]
fn test_overall_thresholds() {
    assert_eq!(
        aggregate(
            MacdSignal::GoldenCross,
            OscillatorSignal::None,
            MaSignal::Bullish,
            BollSignal::WithinBand
        ),
        OverallSignal::StrongBuy
    );
    assert_eq!(
        aggregate(
            MacdSignal::None,
            OscillatorSignal::None,
            MaSignal::Bullish,
            BollSignal::WithinBand
        ),
        OverallSignal::Buy
    );
    assert_eq!(
        aggregate(
            MacdSignal::None,
            OscillatorSignal::None,
            MaSignal::Neutral,
            BollSignal::WithinBand
        ),
        OverallSignal::Neutral
    );
    assert_eq!(
        aggregate(
            MacdSignal::DeadCross,
            OscillatorSignal::Overbought,
            MaSignal::Neutral,
            BollSignal::WithinBand
        ),
        OverallSignal::Sell
    );
    assert_eq!(
        aggregate(
            MacdSignal::DeadCross,
            OscillatorSignal::Overbought,
            MaSignal::Bearish,
            BollSignal::BreakoutDown
        ),
        OverallSignal::StrongSell
    );
}

#[test]
fn test_bullish_wins_a_tie() {
    let overall = aggregate(
        MacdSignal::GoldenCross,
        OscillatorSignal::Overbought,
        MaSignal::Bearish,
        BollSignal::BreakoutUp,
    );
    assert_eq!(overall, OverallSignal::Buy);

    let votes = SignalVotes { bullish: 3, bearish: 3 };
    assert_eq!(votes.overall(), OverallSignal::StrongBuy);
}

#[test]
fn test_overall_helpers() {
    assert!(OverallSignal::StrongBuy.is_bullish());
    assert!(OverallSignal::Sell.is_bearish());
    assert!(!OverallSignal::Neutral.is_bullish());
    assert!(!OverallSignal::Neutral.is_bearish());
    assert_eq!(OverallSignal::StrongSell.to_string(), "strong_sell");
}
