//! Indicator Engine: bar series -> augmented series.
//!
//! Pure transform. The input is never mutated; the output has the same length
//! and date order as the input and carries every field of every selected
//! indicator group on every bar.

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_kdj, calculate_macd, rsi_columns};
use crate::indicators::registry::IndicatorKind;
use crate::indicators::trend::ma_columns;
use crate::indicators::validation::validate_series;
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::indicators::volume::calculate_volume_indicators;
use crate::indicators::Column;
use crate::models::{AugmentedBar, Bar};
use tracing::{debug, warn};

/// Compute every indicator group.
pub fn compute_indicators(
    bars: &[Bar],
    config: &IndicatorConfig,
) -> Result<Vec<AugmentedBar>, IndicatorError> {
    compute_selected(bars, config, &IndicatorKind::ALL)
}

/// Compute only the `selected` indicator groups.
pub fn compute_selected(
    bars: &[Bar],
    config: &IndicatorConfig,
    selected: &[IndicatorKind],
) -> Result<Vec<AugmentedBar>, IndicatorError> {
    debug!(bars = bars.len(), groups = selected.len(), "Computing technical indicators");
    config.validate()?;
    validate_series(bars)?;

    let mut series: Vec<AugmentedBar> = bars.iter().cloned().map(AugmentedBar::new).collect();
    for &kind in selected {
        for (field, values) in compute_group(bars, config, kind)? {
            for (bar, value) in series.iter_mut().zip(values) {
                bar.indicators.insert(field.clone(), value);
            }
        }
    }

    debug!(bars = series.len(), "Technical indicators computed");
    Ok(series)
}

/// Fill in the `selected` groups on an already augmented series.
///
/// Fields that are already present are left untouched, so augmenting twice is
/// a no-op. Groups whose fields are present on every bar are not recomputed.
pub fn augment(
    series: &[AugmentedBar],
    config: &IndicatorConfig,
    selected: &[IndicatorKind],
) -> Result<Vec<AugmentedBar>, IndicatorError> {
    let missing: Vec<IndicatorKind> = selected
        .iter()
        .copied()
        .filter(|kind| {
            let fields = kind.field_names(config);
            !series
                .iter()
                .all(|bar| fields.iter().all(|field| bar.has(field)))
        })
        .collect();

    let mut augmented = series.to_vec();
    if missing.is_empty() {
        return Ok(augmented);
    }

    debug!(groups = ?missing, "Augmenting series with missing indicator groups");
    config.validate()?;
    validate_series(series)?;

    let bars: Vec<Bar> = series.iter().map(|a| a.bar.clone()).collect();
    for kind in missing {
        for (field, values) in compute_group(&bars, config, kind)? {
            for (bar, value) in augmented.iter_mut().zip(values) {
                bar.indicators.entry(field.clone()).or_insert(value);
            }
        }
    }
    Ok(augmented)
}

fn compute_group(
    bars: &[Bar],
    config: &IndicatorConfig,
    kind: IndicatorKind,
) -> Result<Vec<Column>, IndicatorError> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    let columns = match kind {
        IndicatorKind::Ma => ma_columns(bars, &config.ma_periods),
        IndicatorKind::Macd => calculate_macd(&closes, &config.macd).into_columns(),
        IndicatorKind::Kdj => calculate_kdj(bars, &config.kdj).into_columns(),
        IndicatorKind::Rsi => rsi_columns(bars, &config.rsi_periods),
        IndicatorKind::Boll => calculate_bollinger_bands(&closes, &config.bollinger).into_columns(),
        IndicatorKind::Volume => {
            calculate_volume_indicators(
                bars,
                &config.volume_ma_periods,
                config.volume_ratio_period,
            )
            .into_columns()
        }
    };

    check_columns(&columns, bars.len())?;
    Ok(columns)
}

/// Every column has one finite value per bar.
fn check_columns(columns: &[Column], len: usize) -> Result<(), IndicatorError> {
    for (field, values) in columns {
        if values.len() != len {
            warn!(indicator = %field, expected = len, actual = values.len(), "Indicator length mismatch");
            return Err(IndicatorError::ComputeFailure {
                indicator: field.clone(),
                index: values.len().min(len),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            warn!(indicator = %field, index, "Non-finite indicator value");
            return Err(IndicatorError::ComputeFailure {
                indicator: field.clone(),
                index,
            });
        }
    }
    Ok(())
}
