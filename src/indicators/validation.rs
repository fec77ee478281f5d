use crate::indicators::error::IndicatorError;
use crate::models::Bar;

pub fn validate_price(index: usize, field: &str, value: f64) -> Result<(), IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::InvalidSeries {
            index,
            reason: format!("{} is not a finite number", field),
        });
    }
    if value < 0.0 {
        return Err(IndicatorError::InvalidSeries {
            index,
            reason: format!("{} is negative ({})", field, value),
        });
    }
    Ok(())
}

pub fn validate_bar(index: usize, bar: &Bar) -> Result<(), IndicatorError> {
    validate_price(index, "open", bar.open)?;
    validate_price(index, "high", bar.high)?;
    validate_price(index, "low", bar.low)?;
    validate_price(index, "close", bar.close)?;
    Ok(())
}

/// Every bar is well-formed and dates are strictly ascending.
pub fn validate_series<B: AsRef<Bar>>(series: &[B]) -> Result<(), IndicatorError> {
    for (index, bar) in series.iter().enumerate() {
        let bar = bar.as_ref();
        validate_bar(index, bar)?;

        if index > 0 {
            let prev = series[index - 1].as_ref();
            if bar.date <= prev.date {
                return Err(IndicatorError::InvalidSeries {
                    index,
                    reason: format!(
                        "date {} does not follow previous date {}",
                        bar.date, prev.date
                    ),
                });
            }
        }
    }
    Ok(())
}
