use super::Record;
use crate::config::RecordConfig;
use crate::dates;
use crate::template::ValueMapping;

/// Rewrite a raw record into template-ready values
///
/// Every key containing the date token holds a timestamp: it is rewritten to
/// `dd/mm/yyyy` and a `<key><long_date_suffix>` entry with the long pt-BR
/// form is added right after it. Values that do not parse are kept as stored.
///
/// For each event token present in any key, `<time_prefix>_<event>` is
/// derived from the time of day of `<date_token>_<event>`.
///
/// Calendar dates and times are taken in UTC.
pub fn normalize_record(record: &Record, config: &RecordConfig) -> ValueMapping {
    let mut normalized = ValueMapping::new();

    for (key, value) in record {
        if !key.contains(config.date_token.as_str()) || value.trim().is_empty() {
            normalized.set(key.clone(), value.clone());
            continue;
        }

        match dates::parse_timestamp(value) {
            Some(timestamp) => {
                let date = timestamp.date();
                normalized.set(key.clone(), dates::format_short(date));
                normalized.set(
                    format!("{}{}", key, config.long_date_suffix),
                    dates::format_long(date),
                );
            }
            None => {
                tracing::warn!(field = %key, value = %value, "record date could not be parsed; keeping raw value");
                normalized.set(key.clone(), value.clone());
            }
        }
    }

    for event in &config.event_tokens {
        if !record.keys().any(|key| key.contains(event.as_str())) {
            continue;
        }
        let date_key = format!("{}_{}", config.date_token, event);
        match record.get(&date_key).and_then(|v| dates::parse_timestamp(v)) {
            Some(timestamp) => normalized.set(
                format!("{}_{}", config.time_prefix, event),
                dates::format_time(timestamp.time()),
            ),
            None => tracing::debug!(event = %event, "no parseable {} for event time", date_key),
        }
    }

    normalized
}
