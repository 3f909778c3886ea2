//! Line-level parsing of the ports and routes files.

use crate::domain::{Coordinates, Port, SailingRecord, ScheduledSailing};

use super::coordinates::known_coordinates;
use super::error::RecordError;

/// Returns true for lines carrying no record.
pub(super) fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

/// Parse `name dailyCharge [x y]`.
///
/// Without explicit coordinates a well-known port gets its map position and
/// any other port sits at the origin.
pub fn parse_port_line(line: &str) -> Result<Port, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let coordinates = match fields.len() {
        2 => known_coordinates(fields[0]).unwrap_or_default(),
        4 => Coordinates::new(
            parse_number(fields[2], "x coordinate")?,
            parse_number(fields[3], "y coordinate")?,
        ),
        found => {
            return Err(RecordError::FieldCount {
                expected: "2 or 4",
                found,
            });
        }
    };
    let daily_charge = parse_amount(fields[1], "daily charge")?;

    Ok(Port::new(fields[0], daily_charge, coordinates))
}

/// Parse `origin destination D/M/YYYY HH:MM HH:MM cost company`.
///
/// The date and times are validated here so that a bad schedule is reported
/// against its line.
pub fn parse_sailing_line(line: &str) -> Result<(SailingRecord, ScheduledSailing), RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [origin, destination, date, departure, arrival, cost, company] = fields[..] else {
        return Err(RecordError::FieldCount {
            expected: "7",
            found: fields.len(),
        });
    };

    let record = SailingRecord {
        origin: origin.to_string(),
        destination: destination.to_string(),
        date: date.to_string(),
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        cost: parse_amount(cost, "cost")?,
        company: company.to_string(),
    };
    let schedule = ScheduledSailing::from_record(&record)?;

    Ok((record, schedule))
}

/// Parse a charge or fare, which may not be negative.
fn parse_amount(value: &str, field: &'static str) -> Result<i64, RecordError> {
    let amount: i64 = parse_number(value, field)?;
    if amount < 0 {
        return Err(RecordError::Negative {
            field,
            value: amount,
        });
    }
    Ok(amount)
}

fn parse_number<T: std::str::FromStr>(value: &str, field: &'static str) -> Result<T, RecordError> {
    value.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
